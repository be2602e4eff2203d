use chrono::NaiveTime;
use dioxus_logger::tracing;
use entity::shift::ShiftType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        permission::Permission,
        schedule::{CreateScheduleDto, ScheduleDto},
    },
    server::{
        data::{schedule::ScheduleRepository, shift::ShiftRepository, slot::SlotRepository},
        error::{validation::ValidationError, Error},
        model::caller::Caller,
        roster::lock::MaterializationLocks,
        util::validate::{check_name, MAX_NAME_LEN},
    },
};

/// Name of the main shift every new schedule starts with
pub const DEFAULT_SHIFT_NAME: &str = "First shift";
pub const DEFAULT_SHIFT_CAPACITY: i32 = 3;
pub const MAX_SHIFT_CAPACITY: i32 = 50;
/// Longest schedule accepted, in days including both ends
pub const MAX_SCHEDULE_DAYS: i64 = 1096;

fn default_shift_hours() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default(),
    )
}

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MaterializationLocks,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a MaterializationLocks) -> Self {
        Self { db, locks }
    }

    pub async fn list_schedules(&self, caller: &Caller) -> Result<Vec<ScheduleDto>, Error> {
        caller.require(Permission::ViewSchedule)?;

        let schedules = ScheduleRepository::new(self.db).get_all().await?;

        Ok(schedules.into_iter().map(ScheduleDto::from).collect())
    }

    /// Creates a schedule together with its default main shift
    ///
    /// # Returns
    /// - `Ok(ScheduleDto)`: the created schedule
    /// - `Err(Error::ValidationError)`: blank or too long name, end date before start day, or a
    ///   span longer than [`MAX_SCHEDULE_DAYS`]
    /// - `Err(Error::AuthError)`: caller lacks `add_schedule`
    pub async fn create_schedule(
        &self,
        caller: &Caller,
        schedule: CreateScheduleDto,
    ) -> Result<ScheduleDto, Error> {
        caller.require(Permission::AddSchedule)?;

        let mut errors = ValidationError::new();
        let name = check_name(&mut errors, "name", &schedule.name, MAX_NAME_LEN);
        if schedule.end_date < schedule.start_day {
            errors.push("end_date", "must not be before start_day");
        } else if (schedule.end_date - schedule.start_day).num_days() + 1 > MAX_SCHEDULE_DAYS {
            errors.push(
                "end_date",
                format!("schedule must not span more than {} days", MAX_SCHEDULE_DAYS),
            );
        }
        errors.into_result()?;

        let (start_time, end_time) = default_shift_hours();

        let txn = self.db.begin().await?;

        let created = ScheduleRepository::new(&txn)
            .create(name, schedule.start_day, schedule.end_date)
            .await?;
        ShiftRepository::new(&txn)
            .create(
                created.id,
                DEFAULT_SHIFT_NAME.to_string(),
                ShiftType::Main,
                start_time,
                end_time,
                DEFAULT_SHIFT_CAPACITY,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            schedule_id = created.id,
            account_id = caller.account_id,
            "Created schedule {:?}",
            created.name
        );

        Ok(created.into())
    }

    /// Deletes a schedule with its shifts and their slots
    pub async fn delete_schedule(&self, caller: &Caller, schedule_id: i32) -> Result<(), Error> {
        caller.require(Permission::DeleteSchedule)?;

        if ScheduleRepository::new(self.db)
            .get_by_id(schedule_id)
            .await?
            .is_none()
        {
            return Err(Error::not_found("Schedule", schedule_id));
        }

        let lock = self.locks.for_schedule(schedule_id);
        let _guard = lock.lock().await;

        let txn = self.db.begin().await?;

        // Deleted by a concurrent request while waiting for the lock
        if ScheduleRepository::new(&txn)
            .get_by_id(schedule_id)
            .await?
            .is_none()
        {
            self.locks.forget(schedule_id);
            return Err(Error::not_found("Schedule", schedule_id));
        }

        let shift_repo = ShiftRepository::new(&txn);
        let shift_ids: Vec<i32> = shift_repo
            .get_many_by_schedule_id(schedule_id)
            .await?
            .into_iter()
            .map(|shift| shift.id)
            .collect();

        let slots = SlotRepository::new(&txn)
            .delete_many_by_shift_ids(&shift_ids)
            .await?;
        shift_repo.delete_many_by_schedule_id(schedule_id).await?;
        ScheduleRepository::new(&txn).delete(schedule_id).await?;

        txn.commit().await?;

        self.locks.forget(schedule_id);

        tracing::info!(
            schedule_id = schedule_id,
            shifts = shift_ids.len(),
            slots = slots.rows_affected,
            account_id = caller.account_id,
            "Deleted schedule"
        );

        Ok(())
    }
}
