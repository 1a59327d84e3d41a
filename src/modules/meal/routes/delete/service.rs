use super::types::{request, response};
use crate::{
    modules::meal::{repository, routes::parse_id},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = parse_id(&payload.id).ok_or(response::Error::MealNotFound)?;

    match repository::delete_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::FailedToDeleteMeal)?
    {
        true => {
            tracing::info!("Meal {} deleted", id);
            Ok(response::Success::MealDeleted)
        }
        false => Err(response::Error::MealNotFound),
    }
}
