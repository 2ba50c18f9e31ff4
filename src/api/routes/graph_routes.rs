//! Graph routes (e.g., /graph/host)

use axum::{routing::get, Router};

use crate::api::controller::graph::GraphController;
use crate::app_state::AppState;

/// Build the router for graph endpoints under /graph
pub fn graph_routes() -> Router<AppState> {
    Router::new()
        .route("/host", get(GraphController::host))
        .route("/service", get(GraphController::service))
        .route("/templates/{object_type}", get(GraphController::templates))
}
