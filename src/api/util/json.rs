use axum::Json;

use crate::api::dto::ApiResponse;
use crate::domain::graph::graph_error::GraphResult;
use crate::errors::AppError;

pub fn to_json<T: serde::Serialize>(
    result: GraphResult<T>
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(err.into()),
    }
}
