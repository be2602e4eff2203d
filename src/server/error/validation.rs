//! Field-level input validation errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// Collection of rejected input fields.
///
/// Services accumulate every problem with a request before returning, so the client can
/// correct all fields in one round trip.
#[derive(Error, Debug, Default)]
#[error("Invalid input: {}", self.summary())]
pub struct ValidationError {
    fields: Vec<FieldErrorDto>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation error for a single field
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldErrorDto {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldErrorDto] {
        &self.fields
    }

    /// Returns `Ok(())` if no field was rejected, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.field, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                error: "Invalid input".to_string(),
                fields: self.fields,
            }),
        )
            .into_response()
    }
}
