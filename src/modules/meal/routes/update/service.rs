use super::types::{request, response};
use crate::{
    modules::meal::{repository, routes::parse_id, serializer},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = parse_id(&payload.id).ok_or(response::Error::MealNotFound)?;

    repository::find_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::FailedToUpdateMeal)?
        .ok_or(response::Error::MealNotFound)?;

    let changes = serializer::deserialize_update(payload.body, payload.partial).map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    // the row may have been deleted between the lookup and the update
    repository::update_by_id(&ctx.db_conn.pool, id, changes)
        .await
        .map_err(|_| response::Error::FailedToUpdateMeal)?
        .ok_or(response::Error::MealNotFound)
        .map(response::Success::MealUpdated)
}
