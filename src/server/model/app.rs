use sea_orm::DatabaseConnection;

use crate::server::roster::{locale::Locale, lock::MaterializationLocks};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Language of weekday labels on rosters
    pub locale: Locale,
    pub materialization_locks: MaterializationLocks,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            locale: Locale::default(),
            materialization_locks: MaterializationLocks::default(),
        }
    }
}
