use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountDto, CreateAccountDto},
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        controller::util::get_caller::get_caller_from_session, error::Error,
        model::app::AppState, service::account::AccountService,
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Creates a login account without a linked person
#[utoipa::path(
    post,
    path = "/api/users",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_user", body = ErrorDto),
        (status = 422, description = "Invalid input", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_account(
    State(state): State<AppState>,
    session: Session,
    Json(account): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let account = AccountService::new(&state.db)
        .create_account(&caller, account)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Deletes an account, a linked person is kept without account
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing delete_user", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 422, description = "Cannot delete the logged in account", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    Path(account_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    AccountService::new(&state.db)
        .delete_account(&caller, account_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
