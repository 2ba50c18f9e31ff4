pub mod graphite_util;
