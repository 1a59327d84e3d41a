pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod partial_update;
pub mod update;

use crate::types::Context;
use axum::routing::{self, MethodRouter, Router};
use std::sync::Arc;

/// Identifiers that are not integers can never match a row.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

fn collection() -> MethodRouter<Arc<Context>> {
    routing::get(list::handler::handler).post(create::handler::handler)
}

fn member() -> MethodRouter<Arc<Context>> {
    routing::get(get::handler::handler)
        .put(update::handler::handler)
        .patch(partial_update::handler::handler)
        .delete(delete::handler::handler)
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/meals/", collection())
        .route("/meals", collection())
        .route("/meals/:id/", member())
        .route("/meals/:id", member())
}
