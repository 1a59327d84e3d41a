use super::service::service;
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// List all meals
#[utoipa::path(
    get,
    path = "/api/meals/",
    operation_id = "list_meals",
    tag = "meals",
    responses(
        (status = 200, description = "Get a list of all meals", body = [crate::modules::meal::repository::Meal]),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn handler(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx).await
}
