use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, caller::Caller, session::user::SessionUserId},
    service::account::AccountService,
};

/// Resolves the logged in account from session into a [`Caller`]
///
/// # Returns
/// - `Ok(Caller)`: account found, with its effective permissions
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: no account ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: account ID in session no longer
///   exists, the session is cleared
pub async fn get_caller_from_session(state: &AppState, session: &Session) -> Result<Caller, Error> {
    let Some(account_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(caller) = AccountService::new(&state.db).get_caller(account_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for account ID {} with active session but was not found in database",
            account_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(account_id)));
    };

    Ok(caller)
}
