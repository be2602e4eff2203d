//! Declarative test builder.
//!
//! Methods queue the tables a test needs; everything is created during the final `build()`
//! call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_account_tables: bool,
    include_schedule_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_account_tables: false,
            include_schedule_tables: false,
        }
    }

    /// Add the account, group, membership, and group permission tables.
    pub fn with_account_tables(mut self) -> Self {
        self.include_account_tables = true;
        self
    }

    /// Add every table of the schema: account tables plus person, schedule, shift, and slot.
    ///
    /// Also creates the unique `(shift_id, date, position)` index on slots.
    pub fn with_schedule_tables(mut self) -> Self {
        self.include_account_tables = true;
        self.include_schedule_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiftboard_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), shiftboard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Schedule)
    ///     .with_table(Shift)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut tables = Vec::new();
        let mut indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_account_tables {
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::AccountGroup),
                schema.create_table_from_entity(entity::prelude::AccountGroupMembership),
                schema.create_table_from_entity(entity::prelude::GroupPermission),
            ]);
        }

        if self.include_schedule_tables {
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Schedule),
                schema.create_table_from_entity(entity::prelude::Shift),
                schema.create_table_from_entity(entity::prelude::Slot),
            ]);

            indexes.push(
                Index::create()
                    .name("idx_slot_shift_date_position")
                    .table(entity::prelude::Slot)
                    .col(entity::slot::Column::ShiftId)
                    .col(entity::slot::Column::Date)
                    .col(entity::slot::Column::Position)
                    .unique()
                    .to_owned(),
            );
        }

        tables.extend(self.tables);
        test.with_tables(tables, indexes).await?;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_schedule_tables() {
        let result = TestBuilder::new().with_schedule_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() {
        let result = TestBuilder::new()
            .with_account_tables()
            .with_table(entity::prelude::Schedule)
            .build()
            .await;
        assert!(result.is_ok());
    }
}
