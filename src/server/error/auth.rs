use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::ErrorDto, permission::Permission};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Account ID is not present in session")]
    UserNotInSession,
    #[error("Account ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Missing required permission {0}")]
    PermissionDenied(Permission),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized("Not logged in")
            }
            Self::UserNotInDatabase(account_id) => {
                tracing::debug!(
                    account_id = %account_id,
                    "{}",
                    self
                );

                Self::unauthorized("Not logged in")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid username or password")
            }
            Self::PermissionDenied(permission) => {
                tracing::debug!(permission = %permission, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: format!("Permission denied: {} required", permission),
                    }),
                )
                    .into_response()
            }
        }
    }
}
