pub mod meals;

use crate::types::Context;
use axum::routing::{get, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/admin/meals/", get(meals::handler::handler))
        .route("/admin/meals", get(meals::handler::handler))
}
