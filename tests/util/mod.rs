//! Helpers for calling handlers as a logged in account.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use shiftboard::server::model::{
    app::AppState,
    session::user::{SessionUserId, SESSION_USER_ID_KEY},
};
use shiftboard_test_utils::{TestContext, TestError};

pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    /// Inserts an account holding `permissions` and stores it in the test session
    async fn login_with(&self, username: &str, permissions: &[&str]) -> Result<i32, TestError>;

    /// Inserts a superuser account and stores it in the test session
    async fn login_superuser(&self) -> Result<i32, TestError>;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    async fn login_with(&self, username: &str, permissions: &[&str]) -> Result<i32, TestError> {
        let account = self
            .person()
            .insert_account_with_permissions(username, permissions)
            .await?;
        self.session
            .insert(SESSION_USER_ID_KEY, SessionUserId(account.id.to_string()))
            .await?;

        Ok(account.id)
    }

    async fn login_superuser(&self) -> Result<i32, TestError> {
        let account = self.person().insert_account("admin", true).await?;
        self.session
            .insert(SESSION_USER_ID_KEY, SessionUserId(account.id.to_string()))
            .await?;

        Ok(account.id)
    }
}

/// Reads a JSON response body
///
/// # Panics
/// Panics if the body cannot be read or is not valid JSON for `T`.
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
