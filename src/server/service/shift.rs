use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        permission::Permission,
        schedule::{CreateShiftDto, ShiftDto},
    },
    server::{
        data::{schedule::ScheduleRepository, shift::ShiftRepository, slot::SlotRepository},
        error::{validation::ValidationError, Error},
        model::caller::Caller,
        roster::lock::MaterializationLocks,
        service::schedule::{DEFAULT_SHIFT_CAPACITY, MAX_SHIFT_CAPACITY},
        util::validate::{check_name, MAX_NAME_LEN},
    },
};

pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MaterializationLocks,
}

impl<'a> ShiftService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a MaterializationLocks) -> Self {
        Self { db, locks }
    }

    /// Adds a shift to a schedule, capacity defaults to 3
    ///
    /// Slots for the new shift are created the next time the schedule's roster is shown.
    pub async fn create_shift(&self, caller: &Caller, shift: CreateShiftDto) -> Result<ShiftDto, Error> {
        caller.require(Permission::AddShift)?;

        let capacity = shift.capacity.unwrap_or(DEFAULT_SHIFT_CAPACITY);

        let mut errors = ValidationError::new();
        let name = check_name(&mut errors, "name", &shift.name, MAX_NAME_LEN);
        if capacity < 1 {
            errors.push("capacity", "must be at least 1");
        } else if capacity > MAX_SHIFT_CAPACITY {
            errors.push("capacity", format!("must be at most {}", MAX_SHIFT_CAPACITY));
        }
        if ScheduleRepository::new(self.db)
            .get_by_id(shift.schedule_id)
            .await?
            .is_none()
        {
            errors.push(
                "schedule_id",
                format!("schedule {} does not exist", shift.schedule_id),
            );
        }
        errors.into_result()?;

        let created = ShiftRepository::new(self.db)
            .create(
                shift.schedule_id,
                name,
                shift.shift_type,
                shift.start_time,
                shift.end_time,
                capacity,
            )
            .await?;

        tracing::info!(
            shift_id = created.id,
            schedule_id = created.schedule_id,
            account_id = caller.account_id,
            "Created shift {:?}",
            created.name
        );

        Ok(created.into())
    }

    /// Deletes a shift and its slots, returns the ID of the schedule it belonged to
    pub async fn delete_shift(&self, caller: &Caller, shift_id: i32) -> Result<i32, Error> {
        caller.require(Permission::DeleteShift)?;

        let Some(shift) = ShiftRepository::new(self.db).get_by_id(shift_id).await? else {
            return Err(Error::not_found("Shift", shift_id));
        };

        let lock = self.locks.for_schedule(shift.schedule_id);
        let _guard = lock.lock().await;

        let txn = self.db.begin().await?;
        let slots = SlotRepository::new(&txn)
            .delete_many_by_shift_ids(&[shift.id])
            .await?;
        ShiftRepository::new(&txn).delete(shift.id).await?;
        txn.commit().await?;

        tracing::info!(
            shift_id = shift.id,
            schedule_id = shift.schedule_id,
            slots = slots.rows_affected,
            account_id = caller.account_id,
            "Deleted shift"
        );

        Ok(shift.schedule_id)
    }
}
