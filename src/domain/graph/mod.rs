pub mod dto;
pub mod graph_error;
pub mod service;
