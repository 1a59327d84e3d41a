pub mod request {
    pub struct Payload {
        pub body: serde_json::Value,
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
        MealCreated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealCreated(meal) => (
                    StatusCode::CREATED,
                    Json(serializer::to_representation(&meal)),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to create meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
