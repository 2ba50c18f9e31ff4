use thiserror::Error;

use crate::core::persistence::templates::graph_object_type::GraphObjectType;

/// Terminal outcomes of a graph request other than a rendered image.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("No such {0}")]
    ObjectNotFound(GraphObjectType),

    #[error("No such graph")]
    GraphNotFound,

    #[error("The metrics backend yields more than one metric for the given filter. Please specify a more precise filter.")]
    Ambiguous,

    #[error("Metrics backend error: {0}")]
    Backend(String),

    #[error("Failed to load graph templates: {0}")]
    Templates(String),
}

impl GraphError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        GraphError::Backend(format!("{:#}", err))
    }
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;
