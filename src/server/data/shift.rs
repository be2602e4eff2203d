use chrono::NaiveTime;
use entity::shift::ShiftType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRepository<'a, C> {
    /// Creates a new instance of [`ShiftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        schedule_id: i32,
        name: String,
        shift_type: ShiftType,
        start_time: NaiveTime,
        end_time: NaiveTime,
        capacity: i32,
    ) -> Result<entity::shift::Model, DbErr> {
        let shift = entity::shift::ActiveModel {
            schedule_id: ActiveValue::Set(schedule_id),
            name: ActiveValue::Set(name),
            shift_type: ActiveValue::Set(shift_type),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            capacity: ActiveValue::Set(capacity),
            ..Default::default()
        };

        shift.insert(self.db).await
    }

    pub async fn get_by_id(&self, shift_id: i32) -> Result<Option<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find_by_id(shift_id)
            .one(self.db)
            .await
    }

    /// Gets the shifts of a schedule ordered by start time
    pub async fn get_many_by_schedule_id(
        &self,
        schedule_id: i32,
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .filter(entity::shift::Column::ScheduleId.eq(schedule_id))
            .order_by_asc(entity::shift::Column::StartTime)
            .order_by_asc(entity::shift::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a shift, its slots must be deleted first
    pub async fn delete(&self, shift_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Shift::delete_by_id(shift_id)
            .exec(self.db)
            .await
    }

    /// Deletes every shift of a schedule, their slots must be deleted first
    pub async fn delete_many_by_schedule_id(&self, schedule_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Shift::delete_many()
            .filter(entity::shift::Column::ScheduleId.eq(schedule_id))
            .exec(self.db)
            .await
    }
}
