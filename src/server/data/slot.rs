use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::{data::BATCH_SIZE, roster::materialize::SlotPlan};

pub struct SlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotRepository<'a, C> {
    /// Creates a new instance of [`SlotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an open slot for every plan, returns the number of slots created
    ///
    /// Rows are written in batches of [`BATCH_SIZE`] to stay below the database's bind
    /// parameter limit. Pass a transaction as the connection to make the insert all-or-nothing.
    pub async fn create_many(&self, plans: Vec<SlotPlan>) -> Result<usize, DbErr> {
        if plans.is_empty() {
            return Ok(0);
        }

        for batch in plans.chunks(BATCH_SIZE) {
            let slots = batch.iter().map(|plan| entity::slot::ActiveModel {
                shift_id: ActiveValue::Set(plan.shift_id),
                date: ActiveValue::Set(plan.date),
                position: ActiveValue::Set(plan.position),
                person_id: ActiveValue::Set(None),
                ..Default::default()
            });

            entity::prelude::Slot::insert_many(slots)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(plans.len())
    }

    /// Gets the slots of the provided shifts ordered by date and position
    pub async fn get_many_by_shift_ids(
        &self,
        shift_ids: &[i32],
    ) -> Result<Vec<entity::slot::Model>, DbErr> {
        if shift_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Slot::find()
            .filter(entity::slot::Column::ShiftId.is_in(shift_ids.iter().copied()))
            .order_by_asc(entity::slot::Column::Date)
            .order_by_asc(entity::slot::Column::Position)
            .order_by_asc(entity::slot::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, slot_ids: &[i32]) -> Result<Vec<entity::slot::Model>, DbErr> {
        let mut slots = Vec::with_capacity(slot_ids.len());

        for batch in slot_ids.chunks(BATCH_SIZE) {
            let found = entity::prelude::Slot::find()
                .filter(entity::slot::Column::Id.is_in(batch.iter().copied()))
                .all(self.db)
                .await?;
            slots.extend(found);
        }

        Ok(slots)
    }

    /// Assigns a person to a slot, `None` clears the slot
    pub async fn update_person(
        &self,
        slot_id: i32,
        person_id: Option<i32>,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Slot::update_many()
            .col_expr(entity::slot::Column::PersonId, Expr::value(person_id))
            .filter(entity::slot::Column::Id.eq(slot_id))
            .exec(self.db)
            .await
    }

    /// Deletes every slot of the provided shifts
    pub async fn delete_many_by_shift_ids(&self, shift_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Slot::delete_many()
            .filter(entity::slot::Column::ShiftId.is_in(shift_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_many {
        use shiftboard_test_utils::prelude::*;

        use crate::server::{
            data::{slot::SlotRepository, BATCH_SIZE},
            roster::materialize::SlotPlan,
        };

        /// Expect every planned slot to be created open
        #[tokio::test]
        async fn creates_open_slots() -> Result<(), TestError> {
            let test = TestBuilder::new().with_schedule_tables().build().await?;
            let (_, shift) = test.schedule().insert_week_one().await?;

            let slot_repo = SlotRepository::new(&test.db);
            let created = slot_repo
                .create_many(vec![
                    SlotPlan {
                        shift_id: shift.id,
                        date: factory::date(2024, 1, 1),
                        position: 0,
                    },
                    SlotPlan {
                        shift_id: shift.id,
                        date: factory::date(2024, 1, 1),
                        position: 1,
                    },
                ])
                .await?;

            assert_eq!(created, 2);
            let slots = slot_repo.get_many_by_shift_ids(&[shift.id]).await?;
            assert_eq!(slots.len(), 2);
            assert!(slots.iter().all(|s| s.person_id.is_none()));

            Ok(())
        }

        /// Expect a plan spanning several batches to be written completely
        #[tokio::test]
        async fn writes_plan_larger_than_one_batch() -> Result<(), TestError> {
            let test = TestBuilder::new().with_schedule_tables().build().await?;
            let (_, shift) = test.schedule().insert_week_one().await?;
            let count = BATCH_SIZE * 2 + 1;
            let plans = (0..count as i32)
                .map(|position| SlotPlan {
                    shift_id: shift.id,
                    date: factory::date(2024, 1, 1),
                    position,
                })
                .collect();

            let slot_repo = SlotRepository::new(&test.db);
            let created = slot_repo.create_many(plans).await?;

            assert_eq!(created, count);
            let slots = slot_repo.get_many_by_shift_ids(&[shift.id]).await?;
            assert_eq!(slots.len(), count);

            let ids: Vec<i32> = slots.iter().map(|slot| slot.id).collect();
            assert_eq!(slot_repo.get_many_by_ids(&ids).await?.len(), count);

            Ok(())
        }

        /// Expect no query and zero created for an empty plan
        #[tokio::test]
        async fn skips_empty_plan() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let created = SlotRepository::new(&test.db).create_many(Vec::new()).await?;

            assert_eq!(created, 0);

            Ok(())
        }

        /// Expect Error when a (shift, date, position) already has a slot
        #[tokio::test]
        async fn rejects_duplicate_position() -> Result<(), TestError> {
            let test = TestBuilder::new().with_schedule_tables().build().await?;
            let (_, shift) = test.schedule().insert_week_one().await?;
            test.schedule()
                .insert_slot(shift.id, factory::date(2024, 1, 1), 0, None)
                .await?;

            let result = SlotRepository::new(&test.db)
                .create_many(vec![SlotPlan {
                    shift_id: shift.id,
                    date: factory::date(2024, 1, 1),
                    position: 0,
                }])
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update_person {
        use entity::person::Title;
        use shiftboard_test_utils::prelude::*;

        use crate::server::data::slot::SlotRepository;

        /// Expect assigning and clearing a person to overwrite the slot
        #[tokio::test]
        async fn assigns_and_clears() -> Result<(), TestError> {
            let test = TestBuilder::new().with_schedule_tables().build().await?;
            let (_, shift) = test.schedule().insert_week_one().await?;
            let slot = test
                .schedule()
                .insert_slot(shift.id, factory::date(2024, 1, 1), 0, None)
                .await?;
            let person = test
                .person()
                .insert_person("Anna Nowak", Title::Magister, None)
                .await?;

            let slot_repo = SlotRepository::new(&test.db);

            slot_repo.update_person(slot.id, Some(person.id)).await?;
            let assigned = slot_repo.get_many_by_ids(&[slot.id]).await?;
            assert_eq!(assigned[0].person_id, Some(person.id));

            slot_repo.update_person(slot.id, None).await?;
            let cleared = slot_repo.get_many_by_ids(&[slot.id]).await?;
            assert_eq!(cleared[0].person_id, None);

            Ok(())
        }

        /// Expect Error when assigning a person that does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_person() -> Result<(), TestError> {
            let test = TestBuilder::new().with_schedule_tables().build().await?;
            let (_, shift) = test.schedule().insert_week_one().await?;
            let slot = test
                .schedule()
                .insert_slot(shift.id, factory::date(2024, 1, 1), 0, None)
                .await?;

            let result = SlotRepository::new(&test.db)
                .update_person(slot.id, Some(42))
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod delete_many_by_shift_ids {
        use shiftboard_test_utils::prelude::*;

        use crate::server::data::slot::SlotRepository;

        /// Expect only the slots of the provided shifts to be deleted
        #[tokio::test]
        async fn deletes_only_own_slots() -> Result<(), TestError> {
            let test = TestBuilder::new().with_schedule_tables().build().await?;
            let (_, shift) = test.schedule().insert_week_one().await?;
            let (_, other_shift) = test.schedule().insert_week_one().await?;
            for position in 0..2 {
                test.schedule()
                    .insert_slot(shift.id, factory::date(2024, 1, 1), position, None)
                    .await?;
            }
            test.schedule()
                .insert_slot(other_shift.id, factory::date(2024, 1, 1), 0, None)
                .await?;

            let slot_repo = SlotRepository::new(&test.db);
            let result = slot_repo.delete_many_by_shift_ids(&[shift.id]).await?;

            assert_eq!(result.rows_affected, 2);
            assert_eq!(
                slot_repo.get_many_by_shift_ids(&[other_shift.id]).await?.len(),
                1
            );

            Ok(())
        }
    }
}
