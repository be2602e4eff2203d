use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_account::Account;

static FK_PERSON_ACCOUNT_ID: &str = "fk-person-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(integer_null(Person::AccountId).unique_key())
                    .col(string_len(Person::Name, 32))
                    .col(string_len(Person::Title, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PERSON_ACCOUNT_ID)
                    .from_tbl(Person::Table)
                    .from_col(Person::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PERSON_ACCOUNT_ID)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    AccountId,
    Name,
    Title,
}
