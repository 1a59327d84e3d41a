use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

/// Delete a meal
#[utoipa::path(
    delete,
    path = "/api/meals/{id}/",
    operation_id = "destroy_meal",
    tag = "meals",
    params(("id" = i64, Path, description = "Meal identifier")),
    responses(
        (status = 204, description = "No Content"),
        (status = 404, description = "Not Found"),
    )
)]
pub async fn handler(State(ctx): State<Arc<Context>>, Path(id): Path<String>) -> impl IntoResponse {
    service(ctx, request::Payload { id }).await
}
