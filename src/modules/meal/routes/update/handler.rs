use super::{service::service, types::request};
use crate::{types::Context, utils::body::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

/// Update a meal (full update)
#[utoipa::path(
    put,
    path = "/api/meals/{id}/",
    operation_id = "update_meal",
    tag = "meals",
    params(("id" = i64, Path, description = "Meal identifier")),
    request_body = crate::modules::meal::serializer::MealRequest,
    responses(
        (status = 200, description = "Update a meal completely", body = crate::modules::meal::repository::Meal),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found"),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            id,
            body,
            partial: false,
        },
    )
    .await
}
