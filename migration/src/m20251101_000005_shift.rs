use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_schedule::Schedule;

static IDX_SHIFT_SCHEDULE_ID: &str = "idx-shift-schedule_id";
static FK_SHIFT_SCHEDULE_ID: &str = "fk-shift-schedule_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shift::Table)
                    .if_not_exists()
                    .col(pk_auto(Shift::Id))
                    .col(integer(Shift::ScheduleId))
                    .col(string_len(Shift::Name, 32))
                    .col(string_len(Shift::ShiftType, 16))
                    .col(time(Shift::StartTime))
                    .col(time(Shift::EndTime))
                    .col(integer(Shift::Capacity).default(3))
                    .check(Expr::col(Shift::Capacity).gt(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIFT_SCHEDULE_ID)
                    .table(Shift::Table)
                    .col(Shift::ScheduleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIFT_SCHEDULE_ID)
                    .from_tbl(Shift::Table)
                    .from_col(Shift::ScheduleId)
                    .to_tbl(Schedule::Table)
                    .to_col(Schedule::Id)
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
                    .name(FK_SHIFT_SCHEDULE_ID)
                    .table(Shift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIFT_SCHEDULE_ID)
                    .table(Shift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shift::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Shift {
    Table,
    Id,
    ScheduleId,
    Name,
    ShiftType,
    StartTime,
    EndTime,
    Capacity,
}
