use axum::{http::StatusCode, Json};
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

pub fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

pub fn has_errors(errors: &ValidationErrors) -> bool {
    !errors.errors().is_empty()
}
