//! Generated OpenAPI description of the HTTP surface.

use crate::{
    modules::{admin, meal},
    types::Context,
};
use axum::{response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meal API",
        description = "CRUD operations over the meal catalogue"
    ),
    paths(
        meal::routes::list::handler::handler,
        meal::routes::create::handler::handler,
        meal::routes::get::handler::handler,
        meal::routes::update::handler::handler,
        meal::routes::partial_update::handler::handler,
        meal::routes::delete::handler::handler,
        admin::routes::meals::handler::handler,
    ),
    components(schemas(meal::repository::Meal, meal::serializer::MealRequest)),
    tags(
        (name = "meals", description = "Meal resource"),
        (name = "admin", description = "Management console")
    )
)]
pub struct ApiDoc;

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/docs/openapi.json", get(openapi))
}

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn every_meal_operation_is_documented() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];

        for method in ["get", "post"] {
            assert!(paths["/api/meals/"][method].is_object(), "{method} /api/meals/");
        }
        for method in ["get", "put", "patch", "delete"] {
            assert!(
                paths["/api/meals/{id}/"][method].is_object(),
                "{method} /api/meals/{{id}}/"
            );
        }
        assert!(paths["/api/admin/meals/"]["get"].is_object());
        assert!(doc["components"]["schemas"]["Meal"].is_object());
    }
}
