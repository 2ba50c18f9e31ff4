use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::templates::graph_object_type::GraphObjectType;
use crate::core::persistence::templates::graph_template_entity::GraphTemplateEntity;
use crate::domain::graph::dto::chart_image::RenderedImage;
use crate::errors::AppError;

pub struct GraphController;

impl GraphController {
    pub async fn host(
        State(state): State<AppState>,
        Query(params): Query<Vec<(String, String)>>,
    ) -> Result<Response, AppError> {
        let image = state.graph_service.supply_host_image(params).await?;
        Ok(image_response(image))
    }

    pub async fn service(
        State(state): State<AppState>,
        Query(params): Query<Vec<(String, String)>>,
    ) -> Result<Response, AppError> {
        let image = state.graph_service.supply_service_image(params).await?;
        Ok(image_response(image))
    }

    pub async fn templates(
        State(state): State<AppState>,
        Path(object_type): Path<String>,
    ) -> Result<Json<ApiResponse<Vec<GraphTemplateEntity>>>, AppError> {
        let object_type = GraphObjectType::from_code(&object_type)
            .ok_or_else(|| AppError::NotFound(format!("No such object type {}", object_type)))?;
        to_json(state.graph_service.list_templates(object_type))
    }
}

fn image_response(image: RenderedImage) -> Response {
    (
        [
            (header::CONTENT_TYPE, image.content_type),
            (header::CONTENT_DISPOSITION, "inline; filename=\"graph.png\""),
        ],
        image.bytes,
    )
        .into_response()
}
