//! JSON mapping for [`Meal`] records.
//!
//! Outbound, a meal is rendered through its `Serialize` derive as
//! `{id, name, description, price, is_available, created_at, updated_at}`.
//! Inbound bodies are parsed by hand so that every field problem is reported
//! back as a field-level validation error instead of a generic rejection.

use super::repository::{CreateMealPayload, Meal, UpdateMealPayload};
use crate::utils::validation;
use serde_json::{Map, Value};
use sqlx::types::BigDecimal;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const PRICE_MAX_DIGITS: i64 = 10;
pub const PRICE_DECIMAL_PLACES: i64 = 2;

// Bounds on the raw mantissa and exponent, loose enough for trailing zeros.
const PRICE_MAX_BITS: u64 = 128;
const PRICE_MAX_EXPONENT: u64 = 32;

const READ_ONLY_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Create,
    Update,
    PartialUpdate,
}

impl Mode {
    fn requires_all(&self) -> bool {
        !matches!(self, Self::PartialUpdate)
    }
}

/// Writable fields accepted on create and update.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct MealRequest {
    #[schema(example = "Burger", max_length = 200)]
    name: String,
    #[schema(example = "Beef patty with cheddar")]
    description: Option<String>,
    #[schema(value_type = String, example = "9.99")]
    price: BigDecimal,
    #[schema(default = true)]
    is_available: Option<bool>,
}

#[derive(Debug, Default, PartialEq, Validate)]
pub struct MealChanges {
    #[validate(
        custom(function = "validate_name"),
        length(
            max = 200,
            code = "max_length",
            message = "Ensure this field has no more than 200 characters."
        )
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<BigDecimal>,
    pub is_available: Option<bool>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    match name.is_empty() {
        true => Err(validation::error("blank", "This field may not be blank.")),
        false => Ok(()),
    }
}

fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    // comparison and normalization cost grows with the exponent
    let (mantissa, exponent) = price.as_bigint_and_exponent();
    if mantissa.bits() > PRICE_MAX_BITS || exponent.unsigned_abs() > PRICE_MAX_EXPONENT {
        return Err(validation::error(
            "max_digits",
            "Ensure that there are no more than 10 digits in total.",
        ));
    }

    if price < &BigDecimal::from(0) {
        return Err(validation::error(
            "min_value",
            "Ensure this value is greater than or equal to 0.",
        ));
    }

    let normalized = price.normalized();
    let (_, exponent) = normalized.as_bigint_and_exponent();
    let digits = normalized.digits() as i64;
    let decimal_places = exponent.max(0);
    let whole_digits = (digits - exponent).max(0);

    if whole_digits + decimal_places > PRICE_MAX_DIGITS {
        return Err(validation::error(
            "max_digits",
            "Ensure that there are no more than 10 digits in total.",
        ));
    }

    if decimal_places > PRICE_DECIMAL_PLACES {
        return Err(validation::error(
            "max_decimal_places",
            "Ensure that there are no more than 2 decimal places.",
        ));
    }

    if whole_digits > PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES {
        return Err(validation::error(
            "max_whole_digits",
            "Ensure that there are no more than 8 digits before the decimal point.",
        ));
    }

    Ok(())
}

fn parse_text(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.trim().to_string()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(validation::error("invalid", "Not a valid string.")),
    }
}

fn parse_price(value: &Value) -> Result<BigDecimal, ValidationError> {
    let raw = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return Err(validation::error("invalid", "A valid number is required.")),
    };

    BigDecimal::from_str(&raw)
        .map_err(|_| validation::error("invalid", "A valid number is required."))
}

fn parse_bool(value: &Value) -> Result<bool, ValidationError> {
    let invalid = || validation::error("invalid", "Must be a valid boolean.");

    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(invalid()),
        },
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

fn take<T>(
    object: &Map<String, Value>,
    field: &'static str,
    required: bool,
    parse: fn(&Value) -> Result<T, ValidationError>,
    errors: &mut Vec<(&'static str, ValidationError)>,
) -> Option<T> {
    match object.get(field) {
        None => {
            if required {
                errors.push((field, validation::error("required", "This field is required.")));
            }
            None
        }
        Some(Value::Null) => {
            errors.push((field, validation::error("null", "This field may not be null.")));
            None
        }
        Some(value) => parse(value)
            .map_err(|err| errors.push((field, err)))
            .ok(),
    }
}

/// Parses and validates an inbound body, collecting every field error.
pub fn deserialize(body: Value, mode: Mode) -> Result<MealChanges, ValidationErrors> {
    let object = match body {
        Value::Object(object) => object,
        _ => {
            let mut errors = ValidationErrors::new();
            errors.add(
                "non_field_errors",
                validation::error("invalid", "Invalid data. Expected a dictionary."),
            );
            return Err(errors);
        }
    };

    let mut field_errors = vec![];

    for field in READ_ONLY_FIELDS {
        if object.contains_key(field) {
            field_errors.push((field, validation::error("read_only", "This field is read-only.")));
        }
    }

    let required = mode.requires_all();
    let changes = MealChanges {
        name: take(&object, "name", required, parse_text, &mut field_errors),
        description: take(&object, "description", false, parse_text, &mut field_errors),
        price: take(&object, "price", required, parse_price, &mut field_errors),
        is_available: take(&object, "is_available", false, parse_bool, &mut field_errors),
    };

    let mut errors = match changes.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    for (field, err) in field_errors {
        errors.add(field, err);
    }

    match validation::has_errors(&errors) {
        true => Err(errors),
        false => Ok(changes),
    }
}

impl TryFrom<MealChanges> for CreateMealPayload {
    type Error = ValidationErrors;

    fn try_from(changes: MealChanges) -> Result<Self, Self::Error> {
        match (changes.name, changes.price) {
            (Some(name), Some(price)) => Ok(Self {
                name,
                description: changes.description.unwrap_or_default(),
                price: price.with_scale(PRICE_DECIMAL_PLACES),
                is_available: changes.is_available.unwrap_or(true),
            }),
            (name, price) => {
                let mut errors = ValidationErrors::new();
                if name.is_none() {
                    errors.add("name", validation::error("required", "This field is required."));
                }
                if price.is_none() {
                    errors.add("price", validation::error("required", "This field is required."));
                }
                Err(errors)
            }
        }
    }
}

impl From<MealChanges> for UpdateMealPayload {
    fn from(changes: MealChanges) -> Self {
        Self {
            name: changes.name,
            description: changes.description,
            price: changes
                .price
                .map(|price| price.with_scale(PRICE_DECIMAL_PLACES)),
            is_available: changes.is_available,
        }
    }
}

pub fn deserialize_create(body: Value) -> Result<CreateMealPayload, ValidationErrors> {
    deserialize(body, Mode::Create).and_then(CreateMealPayload::try_from)
}

pub fn deserialize_update(body: Value, partial: bool) -> Result<UpdateMealPayload, ValidationErrors> {
    let mode = match partial {
        true => Mode::PartialUpdate,
        false => Mode::Update,
    };

    deserialize(body, mode).map(UpdateMealPayload::from)
}

pub fn to_representation(meal: &Meal) -> Value {
    serde_json::json!(meal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .iter()
            .filter(|(name, _)| name.to_string() == field)
            .flat_map(|(_, errs)| errs.iter().map(|err| err.code.to_string()))
            .collect()
    }

    #[test]
    fn create_applies_defaults() {
        let payload = deserialize_create(json!({"name": "Burger", "price": "9.99"})).unwrap();

        assert_eq!(payload.name, "Burger");
        assert_eq!(payload.description, "");
        assert_eq!(payload.price, BigDecimal::from_str("9.99").unwrap());
        assert!(payload.is_available);
    }

    #[test]
    fn create_accepts_numeric_price_and_normalizes_scale() {
        let payload = deserialize_create(json!({"name": "Soup", "price": 12})).unwrap();
        assert_eq!(payload.price.to_string(), "12.00");

        let payload = deserialize_create(json!({"name": "Soup", "price": 4.5})).unwrap();
        assert_eq!(payload.price.to_string(), "4.50");
    }

    #[test]
    fn create_requires_name_and_price() {
        let errors = deserialize_create(json!({"description": "no name"})).unwrap_err();

        assert_eq!(codes(&errors, "name"), vec!["required"]);
        assert_eq!(codes(&errors, "price"), vec!["required"]);
    }

    #[test]
    fn read_only_fields_are_rejected() {
        let errors = deserialize_create(json!({
            "id": 7,
            "name": "Burger",
            "price": "9.99",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap_err();

        assert_eq!(codes(&errors, "id"), vec!["read_only"]);
        assert_eq!(codes(&errors, "created_at"), vec!["read_only"]);
        assert_eq!(codes(&errors, "updated_at"), vec!["read_only"]);
        assert!(codes(&errors, "name").is_empty());
    }

    #[test]
    fn name_is_trimmed_and_must_not_be_blank() {
        let payload = deserialize_create(json!({"name": "  Wrap  ", "price": "3"})).unwrap();
        assert_eq!(payload.name, "Wrap");

        let errors = deserialize_create(json!({"name": "   ", "price": "3"})).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["blank"]);
    }

    #[test]
    fn name_length_is_bounded() {
        let errors =
            deserialize_create(json!({"name": "x".repeat(201), "price": "3"})).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["max_length"]);

        assert!(deserialize_create(json!({"name": "x".repeat(200), "price": "3"})).is_ok());
    }

    #[test]
    fn price_rules() {
        let cases = [
            (json!("-0.01"), "min_value"),
            (json!("1.999"), "max_decimal_places"),
            (json!("123456789"), "max_whole_digits"),
            (json!("123456789.12"), "max_digits"),
            (json!("abc"), "invalid"),
            (json!(true), "invalid"),
            (Value::Null, "null"),
        ];

        for (price, code) in cases {
            let errors =
                deserialize_create(json!({"name": "Burger", "price": price})).unwrap_err();
            assert_eq!(codes(&errors, "price"), vec![code], "price {price}");
        }

        assert!(deserialize_create(json!({"name": "Free", "price": "0"})).is_ok());
        assert!(deserialize_create(json!({"name": "Max", "price": "99999999.99"})).is_ok());
    }

    #[test]
    fn huge_exponents_are_rejected_without_expanding_them() {
        let started = std::time::Instant::now();

        for price in ["1e10000000", "1e-10000000", "0e-100000", "-1e10000000"] {
            let errors =
                deserialize_create(json!({"name": "Burger", "price": price})).unwrap_err();
            assert_eq!(codes(&errors, "price"), vec!["max_digits"], "price {price}");
        }

        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert!(deserialize_create(json!({"name": "Tea", "price": "1.5000"})).is_ok());
    }

    #[test]
    fn boolean_coercion() {
        for (raw, expected) in [
            (json!(false), false),
            (json!("True"), true),
            (json!("0"), false),
            (json!(1), true),
        ] {
            let payload =
                deserialize_create(json!({"name": "Tea", "price": "1", "is_available": raw}))
                    .unwrap();
            assert_eq!(payload.is_available, expected);
        }

        let errors = deserialize_create(json!({"name": "Tea", "price": "1", "is_available": "maybe"}))
            .unwrap_err();
        assert_eq!(codes(&errors, "is_available"), vec!["invalid"]);
    }

    #[test]
    fn description_may_be_blank_but_not_null() {
        let payload =
            deserialize_create(json!({"name": "Tea", "price": "1", "description": ""})).unwrap();
        assert_eq!(payload.description, "");

        let errors = deserialize_create(json!({"name": "Tea", "price": "1", "description": null}))
            .unwrap_err();
        assert_eq!(codes(&errors, "description"), vec!["null"]);
    }

    #[test]
    fn all_errors_are_reported_together() {
        let errors = deserialize_create(json!({"name": "", "price": "-1", "is_available": []}))
            .unwrap_err();

        assert_eq!(codes(&errors, "name"), vec!["blank"]);
        assert_eq!(codes(&errors, "price"), vec!["min_value"]);
        assert_eq!(codes(&errors, "is_available"), vec!["invalid"]);
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        let errors = deserialize(json!([{"name": "Burger"}]), Mode::Create).unwrap_err();
        assert_eq!(codes(&errors, "non_field_errors"), vec!["invalid"]);
    }

    #[test]
    fn full_update_requires_name_and_price() {
        let errors = deserialize_update(json!({"price": "2.00"}), false).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["required"]);
        assert!(codes(&errors, "price").is_empty());
    }

    #[test]
    fn partial_update_accepts_any_subset() {
        let payload = deserialize_update(json!({"price": "11.5"}), true).unwrap();

        assert_eq!(payload.name, None);
        assert_eq!(payload.description, None);
        assert_eq!(payload.price.map(|p| p.to_string()), Some("11.50".to_string()));
        assert_eq!(payload.is_available, None);

        let payload = deserialize_update(json!({}), true).unwrap();
        assert!(payload.price.is_none() && payload.name.is_none());
    }

    #[test]
    fn partial_changes_cannot_become_a_create_payload() {
        let changes = deserialize(json!({"name": "Burger"}), Mode::PartialUpdate).unwrap();
        let errors = CreateMealPayload::try_from(changes).unwrap_err();
        assert_eq!(codes(&errors, "price"), vec!["required"]);
    }

    #[test]
    fn representation_has_the_public_shape() {
        let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let meal = Meal {
            id: 1,
            name: "Burger".to_string(),
            description: String::new(),
            price: BigDecimal::from_str("9.99").unwrap(),
            is_available: true,
            created_at,
            updated_at: created_at,
        };

        assert_eq!(
            to_representation(&meal),
            json!({
                "id": 1,
                "name": "Burger",
                "description": "",
                "price": "9.99",
                "is_available": true,
                "created_at": "2024-06-01T12:00:00Z",
                "updated_at": "2024-06-01T12:00:00Z"
            })
        );
    }
}
