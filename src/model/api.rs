use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single rejected input field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Name of the offending field
    pub field: String,
    /// Human readable reason the value was rejected
    pub message: String,
}

/// The response when submitted input fails validation
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    /// The error message
    pub error: String,
    /// Per-field validation messages
    pub fields: Vec<FieldErrorDto>,
}
