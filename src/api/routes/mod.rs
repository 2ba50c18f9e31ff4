//! API route declarations (e.g., /graph/*)

pub mod graph_routes;
