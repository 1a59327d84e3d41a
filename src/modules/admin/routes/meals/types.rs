pub mod request {
    use serde::Deserialize;
    use utoipa::IntoParams;

    #[derive(Deserialize, Default, IntoParams)]
    #[into_params(parameter_in = Query)]
    pub struct Filters {
        /// Whitespace separated terms matched against name and description
        pub q: Option<String>,
        /// `true` or `false`
        pub is_available: Option<String>,
        /// `any`, `today`, `past_7_days`, `this_month` or `this_year`
        pub created_at: Option<String>,
        /// `name`, `price`, `is_available` or `created_at`, optionally prefixed with `-`
        pub ordering: Option<String>,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::meal::repository::Meal;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use chrono::{DateTime, Utc};
    use serde::Serialize;
    use serde_json::json;
    use sqlx::types::BigDecimal;

    /// One changelist line: the columns shown by the console.
    #[derive(Serialize)]
    pub struct Row {
        pub id: i64,
        pub name: String,
        pub price: BigDecimal,
        pub is_available: bool,
        pub created_at: DateTime<Utc>,
    }

    impl From<Meal> for Row {
        fn from(meal: Meal) -> Self {
            Self {
                id: meal.id,
                name: meal.name,
                price: meal.price,
                is_available: meal.is_available,
                created_at: meal.created_at,
            }
        }
    }

    pub enum Success {
        Meals(Vec<Row>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meals(rows) => (
                    StatusCode::OK,
                    Json(json!({
                        "count": rows.len(),
                        "results": rows,
                    })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    pub enum Error {
        InvalidFilter(&'static str),
        FailedToFetchMeals,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFilter(filter) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Invalid value for filter `{filter}`") })),
                )
                    .into_response(),
                Self::FailedToFetchMeals => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch meals" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
