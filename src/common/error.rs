use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Request-level error. Maps onto the three observable failure modes:
/// 404 with an empty body, 400 with a per-field problem body, and 500
/// for storage failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("validation failed")]
    Validation(BTreeMap<String, Vec<String>>),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ValidationProblem {
    errors: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl ApiError {
    /// Single-field validation failure, for errors raised outside the
    /// derive-based validators (e.g. patch application).
    pub fn validation_on(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), vec![message.into()]);
        ApiError::Validation(fields)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, violations) in errors.field_errors() {
            let messages = violations
                .iter()
                .map(|v| {
                    v.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| v.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        ApiError::Validation(fields)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationProblem { errors })).into_response()
            }
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
        #[validate(range(min = 1, max = 10, message = "out of range"))]
        count: i32,
    }

    #[test]
    fn aggregates_every_violated_field() {
        let probe = Probe {
            name: "ab".into(),
            count: 0,
        };
        let err = ApiError::from(probe.validate().unwrap_err());
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields["name"], vec!["too short"]);
                assert_eq!(fields["count"], vec!["out of range"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
