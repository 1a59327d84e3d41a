use crate::{
    modules::meal::routes::update::{service::service, types::request},
    types::Context,
    utils::body::JsonBody,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

/// Partially update a meal
#[utoipa::path(
    patch,
    path = "/api/meals/{id}/",
    operation_id = "partial_update_meal",
    tag = "meals",
    params(("id" = i64, Path, description = "Meal identifier")),
    request_body = crate::modules::meal::serializer::MealRequest,
    responses(
        (status = 200, description = "Partially update a meal", body = crate::modules::meal::repository::Meal),
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
            partial: true,
        },
    )
    .await
}
