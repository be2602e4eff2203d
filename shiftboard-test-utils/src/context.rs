//! Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestContext {
    pub db: DatabaseConnection,
    pub session: Session,
}

impl TestContext {
    /// Builds the application state around the test database
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    pub(crate) async fn with_tables(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
