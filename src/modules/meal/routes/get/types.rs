pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::meal::{repository::Meal, serializer};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Meal(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meal(meal) => (
                    StatusCode::OK,
                    Json(serializer::to_representation(&meal)),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchMeal,
        MealNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Meal not found" })),
                )
                    .into_response(),
                Self::FailedToFetchMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
