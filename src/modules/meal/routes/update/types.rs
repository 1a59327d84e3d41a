pub mod request {
    pub struct Payload {
        pub id: String,
        pub body: serde_json::Value,
        pub partial: bool,
    }
}

pub mod response {
    use crate::{
        modules::meal::{repository::Meal, serializer},
        utils::validation,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MealUpdated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealUpdated(meal) => (
                    StatusCode::OK,
                    Json(serializer::to_representation(&meal)),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MealNotFound,
        FailedToValidate(ValidationErrors),
        FailedToUpdateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": "Meal not found"})),
                )
                    .into_response(),
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToUpdateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to update meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
