pub use sea_orm_migration::prelude::*;

mod m20251101_000001_account;
mod m20251101_000002_account_group;
mod m20251101_000003_person;
mod m20251101_000004_schedule;
mod m20251101_000005_shift;
mod m20251101_000006_slot;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_account::Migration),
            Box::new(m20251101_000002_account_group::Migration),
            Box::new(m20251101_000003_person::Migration),
            Box::new(m20251101_000004_schedule::Migration),
            Box::new(m20251101_000005_shift::Migration),
            Box::new(m20251101_000006_slot::Migration),
        ]
    }
}
