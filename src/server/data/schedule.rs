use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    /// Creates a new instance of [`ScheduleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        start_day: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<entity::schedule::Model, DbErr> {
        let schedule = entity::schedule::ActiveModel {
            name: ActiveValue::Set(name),
            start_day: ActiveValue::Set(start_day),
            end_date: ActiveValue::Set(end_date),
            ..Default::default()
        };

        schedule.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        schedule_id: i32,
    ) -> Result<Option<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find_by_id(schedule_id)
            .one(self.db)
            .await
    }

    /// Gets all schedules in creation order
    pub async fn get_all(&self) -> Result<Vec<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find()
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a schedule
    ///
    /// Shifts of the schedule must be deleted first. Returns OK regardless of the schedule
    /// existing, check [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, schedule_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Schedule::delete_by_id(schedule_id)
            .exec(self.db)
            .await
    }
}
