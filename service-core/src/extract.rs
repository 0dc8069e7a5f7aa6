//! Request extractors shared by the HTTP services.

use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{
        FromRequest, Request,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON type a payload field must carry when it is present and not `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    String,
    Number,
    Bool,
    Object,
    Array,
}

impl JsonKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            JsonKind::String => value.is_string(),
            JsonKind::Number => value.is_number(),
            JsonKind::Bool => value.is_boolean(),
            JsonKind::Object => value.is_object(),
            JsonKind::Array => value.is_array(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            JsonKind::String => "a string",
            JsonKind::Number => "a number",
            JsonKind::Bool => "a boolean",
            JsonKind::Object => "an object",
            JsonKind::Array => "an array",
        }
    }
}

/// Declares the JSON kind of every field of a request payload.
///
/// Fields listed here are type-checked before deserialization so a wrong
/// type is reported in the same `fields` map as the validator rules.
pub trait FieldKinds {
    const FIELDS: &'static [(&'static str, JsonKind)];
}

/// JSON body that has been type-checked per field, deserialized and then
/// checked with [`Validate`].
///
/// Wrong field types and rule violations are merged into one 422; malformed
/// JSON is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::InvalidPayload(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => {
                AppError::UnsupportedMediaType(err.body_text())
            }
            other => AppError::BadRequest(anyhow::anyhow!(other.body_text())),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
    }
}

fn type_error(field: &'static str, kind: JsonKind) -> ValidationError {
    let mut error = ValidationError::new("type");
    error.message = Some(format!("{field} must be {}", kind.describe()).into());
    error
}

/// Deserializes `body` into `T` and validates it, collecting type mismatches
/// and rule violations into a single [`ValidationErrors`].
///
/// A field with the wrong type is dropped before deserialization; only its
/// type error is reported.
pub fn validate_value<T>(body: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate + FieldKinds,
{
    let Value::Object(mut map) = body else {
        return Err(AppError::InvalidPayload(
            "request body must be a JSON object".to_string(),
        ));
    };

    let mut mistyped = Vec::new();
    for &(field, kind) in T::FIELDS {
        let wrong = map
            .get(field)
            .is_some_and(|value| !value.is_null() && !kind.matches(value));
        if wrong {
            map.remove(field);
            mistyped.push((field, kind));
        }
    }

    let value: T = serde_json::from_value(Value::Object(map))
        .map_err(|err| AppError::InvalidPayload(err.to_string()))?;
    let rule_errors = value.validate().err();

    if mistyped.is_empty() {
        return match rule_errors {
            Some(errors) => Err(errors.into()),
            None => Ok(value),
        };
    }

    let rule_fields = rule_errors
        .as_ref()
        .map(|errors| errors.field_errors())
        .unwrap_or_default();
    let mut merged = ValidationErrors::new();
    for &(field, _) in T::FIELDS {
        if let Some(&(_, kind)) = mistyped.iter().find(|(name, _)| *name == field) {
            merged.add(field, type_error(field, kind));
        } else if let Some(errors) = rule_fields.get(field) {
            for error in errors.iter() {
                merged.add(field, error.clone());
            }
        }
    }
    Err(merged.into())
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldKinds,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        validate_value(body).map(ValidatedJson)
    }
}
