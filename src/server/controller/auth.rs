use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        account::{CurrentUserDto, LoginDto},
        api::ErrorDto,
    },
    server::{
        controller::util::get_caller::get_caller_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Starts a session for the account matching the submitted credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, returns the current user", body = CurrentUserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let account_id = AuthService::new(&state.db)
        .login(&credentials.username, &credentials.password)
        .await?;

    // Prevent session fixation across logins
    session.cycle_id().await?;
    SessionUserId::insert(&session, account_id).await?;

    let caller = get_caller_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(CurrentUserDto::from(caller))))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_account_id = SessionUserId::get(&session).await?;

    // Clearing a session without data fails, only clear when someone is logged in
    if maybe_account_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the logged in account and its effective permissions
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = CurrentUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(CurrentUserDto::from(caller))))
}
