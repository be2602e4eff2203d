use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000003_person::Person, m20251101_000005_shift::Shift};

static IDX_SLOT_SHIFT_DATE_POSITION: &str = "idx-slot-shift_id-date-position";
static IDX_SLOT_PERSON_ID: &str = "idx-slot-person_id";
static FK_SLOT_SHIFT_ID: &str = "fk-slot-shift_id";
static FK_SLOT_PERSON_ID: &str = "fk-slot-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slot::Table)
                    .if_not_exists()
                    .col(pk_auto(Slot::Id))
                    .col(integer(Slot::ShiftId))
                    .col(date(Slot::Date))
                    .col(integer(Slot::Position))
                    .col(integer_null(Slot::PersonId))
                    .to_owned(),
            )
            .await?;

        // One slot per position for each shift and day
        manager
            .create_index(
                Index::create()
                    .name(IDX_SLOT_SHIFT_DATE_POSITION)
                    .table(Slot::Table)
                    .col(Slot::ShiftId)
                    .col(Slot::Date)
                    .col(Slot::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SLOT_PERSON_ID)
                    .table(Slot::Table)
                    .col(Slot::PersonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SLOT_SHIFT_ID)
                    .from_tbl(Slot::Table)
                    .from_col(Slot::ShiftId)
                    .to_tbl(Shift::Table)
                    .to_col(Shift::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SLOT_PERSON_ID)
                    .from_tbl(Slot::Table)
                    .from_col(Slot::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::Id)
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
                    .name(FK_SLOT_PERSON_ID)
                    .table(Slot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SLOT_SHIFT_ID)
                    .table(Slot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SLOT_PERSON_ID)
                    .table(Slot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SLOT_SHIFT_DATE_POSITION)
                    .table(Slot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Slot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Slot {
    Table,
    Id,
    ShiftId,
    Date,
    Position,
    PersonId,
}
