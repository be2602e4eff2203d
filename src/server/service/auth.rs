use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::account::AccountRepository,
    error::{auth::AuthError, Error},
    util::password::{verify_password, verify_unknown_account},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the account ID to store in session
    ///
    /// Unknown usernames and wrong passwords fail alike with
    /// `Err(Error::AuthError(AuthError::InvalidCredentials))`, and both run one password
    /// verification.
    pub async fn login(&self, username: &str, password: &str) -> Result<i32, Error> {
        let Some(account) = AccountRepository::new(self.db)
            .get_by_username(username)
            .await?
        else {
            verify_unknown_account(password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(account_id = account.id, "Account logged in");

        Ok(account.id)
    }
}
