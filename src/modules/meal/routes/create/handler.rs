use super::{service::service, types::request};
use crate::{types::Context, utils::body::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// Create a new meal
#[utoipa::path(
    post,
    path = "/api/meals/",
    operation_id = "create_meal",
    tag = "meals",
    request_body = crate::modules::meal::serializer::MealRequest,
    responses(
        (status = 201, description = "Meal created", body = crate::modules::meal::repository::Meal),
        (status = 400, description = "Bad Request"),
        (status = 415, description = "Body is not JSON"),
    )
)]
pub async fn handler(State(ctx): State<Arc<Context>>, JsonBody(body): JsonBody) -> impl IntoResponse {
    service(ctx, request::Payload { body }).await
}
