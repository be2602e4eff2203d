//! Error types for the shiftboard server.
//!
//! Domain-specific errors (authentication, configuration, input validation) are aggregated
//! into a single [`Error`] together with the errors of the libraries the server talks to.
//! Every error implements `IntoResponse` so handlers can return `Result<_, Error>` directly.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the shiftboard server.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying errors convert with `?`.
/// The `IntoResponse` implementation maps each category to an HTTP status:
/// - authentication and authorization failures to 401/403
/// - rejected input to 422
/// - references to missing records to 404
/// - everything else to 500, logged with the full error
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Submitted input failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced record does not exist.
    #[error("{resource} ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal failure not caused by the request, such as password hashing.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Failure to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource = resource, id = id, "Requested record not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
