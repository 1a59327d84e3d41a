use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

/// Console listing of meals
#[utoipa::path(
    get,
    path = "/api/admin/meals/",
    operation_id = "console_list_meals",
    tag = "admin",
    params(request::Filters),
    responses(
        (status = 200, description = "Meals matching the console search and filters"),
        (status = 400, description = "Unknown filter value"),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Query(filters): Query<request::Filters>,
) -> impl IntoResponse {
    service(ctx, request::Payload { filters }).await
}
