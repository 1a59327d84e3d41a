use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

/// Retrieve a specific meal by ID
#[utoipa::path(
    get,
    path = "/api/meals/{id}/",
    operation_id = "retrieve_meal",
    tag = "meals",
    params(("id" = i64, Path, description = "Meal identifier")),
    responses(
        (status = 200, description = "Get details of a specific meal", body = crate::modules::meal::repository::Meal),
        (status = 404, description = "Not Found"),
    )
)]
pub async fn handler(State(ctx): State<Arc<Context>>, Path(id): Path<String>) -> impl IntoResponse {
    service(ctx, request::Payload { id }).await
}
