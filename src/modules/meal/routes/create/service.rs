use super::types::{request, response};
use crate::{
    modules::meal::{repository, serializer},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let meal = serializer::deserialize_create(payload.body).map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(&ctx.db_conn.pool, meal)
        .await
        .map_err(|_| response::Error::FailedToCreateMeal)
        .map(|meal| {
            tracing::info!("Meal {} created", meal.id);
            response::Success::MealCreated(meal)
        })
}
