use chrono::{NaiveDate, NaiveTime};
use entity::shift::ShiftType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory::{self, MOCK_SHIFT_NAME},
    TestContext,
};

impl TestContext {
    pub fn schedule<'a>(&'a self) -> ScheduleFixtures<'a> {
        ScheduleFixtures { test: self }
    }
}

pub struct ScheduleFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ScheduleFixtures<'a> {
    pub async fn insert_schedule(
        &self,
        name: &str,
        start_day: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<entity::schedule::Model, TestError> {
        Ok(
            entity::prelude::Schedule::insert(entity::schedule::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                start_day: ActiveValue::Set(start_day),
                end_date: ActiveValue::Set(end_date),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_shift(
        &self,
        schedule_id: i32,
        name: &str,
        shift_type: ShiftType,
        start_time: NaiveTime,
        end_time: NaiveTime,
        capacity: i32,
    ) -> Result<entity::shift::Model, TestError> {
        Ok(entity::prelude::Shift::insert(entity::shift::ActiveModel {
            schedule_id: ActiveValue::Set(schedule_id),
            name: ActiveValue::Set(name.to_string()),
            shift_type: ActiveValue::Set(shift_type),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            capacity: ActiveValue::Set(capacity),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_slot(
        &self,
        shift_id: i32,
        date: NaiveDate,
        position: i32,
        person_id: Option<i32>,
    ) -> Result<entity::slot::Model, TestError> {
        Ok(entity::prelude::Slot::insert(entity::slot::ActiveModel {
            shift_id: ActiveValue::Set(shift_id),
            date: ActiveValue::Set(date),
            position: ActiveValue::Set(position),
            person_id: ActiveValue::Set(person_id),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Inserts the two-day `Week1` schedule (2024-01-01 to 2024-01-02) with its main shift,
    /// 08:00 to 16:00 with two slots per day. No slots are created.
    pub async fn insert_week_one(
        &self,
    ) -> Result<(entity::schedule::Model, entity::shift::Model), TestError> {
        let schedule = self
            .insert_schedule("Week1", factory::date(2024, 1, 1), factory::date(2024, 1, 2))
            .await?;
        let shift = self
            .insert_shift(
                schedule.id,
                MOCK_SHIFT_NAME,
                ShiftType::Main,
                factory::time(8, 0),
                factory::time(16, 0),
                2,
            )
            .await?;

        Ok((schedule, shift))
    }
}
