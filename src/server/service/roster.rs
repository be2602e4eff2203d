//! Roster views of a schedule.
//!
//! Every view that shows slots (detail, edit, print) first materializes the schedule so each
//! (shift, day) cell has `capacity` slots to show. Materialization of a schedule is serialized
//! through [`MaterializationLocks`] and backed by the unique `(shift_id, date, position)` index.

use std::collections::{HashMap, HashSet};

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        permission::Permission,
        person::PersonDto,
        schedule::{CoverageDto, CoverageWarningDto, EditRosterDto, RosterDto, UpdateAssignmentsDto},
    },
    server::{
        data::{
            person::PersonRepository, schedule::ScheduleRepository, shift::ShiftRepository,
            slot::SlotRepository,
        },
        error::{validation::ValidationError, Error},
        model::{
            caller::Caller,
            convert::roster_dto,
            db::{PersonModel, ScheduleModel, ShiftModel, SlotModel},
        },
        roster::{
            coverage::check_coverage,
            days::schedule_days,
            document::{HtmlRosterDocument, RosterDocumentRenderer, REPORT_FILENAME},
            grid::{build_roster, RosterGrid},
            locale::Locale,
            lock::MaterializationLocks,
            materialize::plan_missing_slots,
            ordering::order_shifts,
        },
    },
};

/// A rendered roster export
pub struct RosterDocument {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// A schedule with everything needed to lay out its roster
struct LoadedSchedule {
    schedule: ScheduleModel,
    shifts: Vec<ShiftModel>,
    slots: Vec<SlotModel>,
    people: HashMap<i32, PersonModel>,
}

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MaterializationLocks,
    locale: Locale,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a MaterializationLocks, locale: Locale) -> Self {
        Self { db, locks, locale }
    }

    /// Creates every missing slot of a schedule, returns the number of slots created
    ///
    /// Each (shift, day) pair in the schedule's range ends up with at least `capacity` slots.
    /// Running it again creates nothing.
    pub async fn materialize(&self, schedule: &ScheduleModel) -> Result<usize, Error> {
        let lock = self.locks.for_schedule(schedule.id);
        let _guard = lock.lock().await;

        let shifts = ShiftRepository::new(self.db)
            .get_many_by_schedule_id(schedule.id)
            .await?;
        let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();
        let existing = SlotRepository::new(self.db)
            .get_many_by_shift_ids(&shift_ids)
            .await?;

        let days = schedule_days(schedule.start_day, schedule.end_date);
        let plans = plan_missing_slots(&shifts, &days, &existing);

        if plans.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        let created = SlotRepository::new(&txn).create_many(plans).await?;
        txn.commit().await?;

        tracing::debug!(
            schedule_id = schedule.id,
            created = created,
            "Materialized missing slots"
        );

        Ok(created)
    }

    /// Day-by-shift roster of a schedule
    pub async fn get_roster(&self, caller: &Caller, schedule_id: i32) -> Result<RosterDto, Error> {
        caller.require(Permission::ViewSchedule)?;

        let (schedule, grid) = self.materialized_grid(schedule_id).await?;

        Ok(roster_dto(schedule, grid))
    }

    /// Roster plus the people that can be assigned to its slots
    pub async fn get_edit_roster(
        &self,
        caller: &Caller,
        schedule_id: i32,
    ) -> Result<EditRosterDto, Error> {
        caller.require(Permission::ChangeSchedule)?;

        let (schedule, grid) = self.materialized_grid(schedule_id).await?;
        let assignable_people = PersonRepository::new(self.db).get_with_account().await?;

        Ok(EditRosterDto {
            roster: roster_dto(schedule, grid),
            assignable_people: assignable_people.into_iter().map(PersonDto::from).collect(),
        })
    }

    /// Assigns people to slots of a schedule, `None` clears a slot
    ///
    /// All assignments are validated before any is written and written in one transaction.
    /// Concurrent edits of the same slot overwrite each other.
    ///
    /// # Returns
    /// - `Ok(RosterDto)`: the roster after the update
    /// - `Err(Error::ValidationError)`: a slot outside the schedule or an unknown person
    /// - `Err(Error::NotFound)`: no schedule with the provided ID
    pub async fn update_assignments(
        &self,
        caller: &Caller,
        schedule_id: i32,
        update: UpdateAssignmentsDto,
    ) -> Result<RosterDto, Error> {
        caller.require(Permission::ChangeSchedule)?;

        let schedule = self.get_schedule(schedule_id).await?;

        let shift_ids: HashSet<i32> = ShiftRepository::new(self.db)
            .get_many_by_schedule_id(schedule.id)
            .await?
            .into_iter()
            .map(|shift| shift.id)
            .collect();

        let slot_ids: Vec<i32> = update.assignments.iter().map(|a| a.slot_id).collect();
        let schedule_slot_ids: HashSet<i32> = SlotRepository::new(self.db)
            .get_many_by_ids(&slot_ids)
            .await?
            .into_iter()
            .filter(|slot| shift_ids.contains(&slot.shift_id))
            .map(|slot| slot.id)
            .collect();

        let person_ids: Vec<i32> = update
            .assignments
            .iter()
            .filter_map(|a| a.person_id)
            .collect();
        let known_people: HashSet<i32> = PersonRepository::new(self.db)
            .get_many_by_ids(&person_ids)
            .await?
            .into_iter()
            .map(|person| person.id)
            .collect();

        let mut errors = ValidationError::new();
        for (index, assignment) in update.assignments.iter().enumerate() {
            if !schedule_slot_ids.contains(&assignment.slot_id) {
                errors.push(
                    &format!("assignments[{}].slot_id", index),
                    format!(
                        "slot {} does not belong to schedule {}",
                        assignment.slot_id, schedule.id
                    ),
                );
            }
            if let Some(person_id) = assignment.person_id {
                if !known_people.contains(&person_id) {
                    errors.push(
                        &format!("assignments[{}].person_id", index),
                        format!("person {} does not exist", person_id),
                    );
                }
            }
        }
        errors.into_result()?;

        let txn = self.db.begin().await?;
        let slot_repo = SlotRepository::new(&txn);
        for assignment in &update.assignments {
            slot_repo
                .update_person(assignment.slot_id, assignment.person_id)
                .await?;
        }
        txn.commit().await?;

        tracing::debug!(
            schedule_id = schedule.id,
            assignments = update.assignments.len(),
            account_id = caller.account_id,
            "Updated slot assignments"
        );

        let loaded = self.load(schedule).await?;

        Ok(self.to_roster_dto(loaded))
    }

    /// Coverage warnings of a schedule's current assignments
    pub async fn check_coverage(
        &self,
        caller: &Caller,
        schedule_id: i32,
    ) -> Result<CoverageDto, Error> {
        caller.require(Permission::ChangeSchedule)?;

        let schedule = self.get_schedule(schedule_id).await?;
        let loaded = self.load(schedule).await?;

        let days = schedule_days(loaded.schedule.start_day, loaded.schedule.end_date);
        let shifts = order_shifts(loaded.shifts);
        let warnings = check_coverage(&days, &shifts, &loaded.slots, &loaded.people);

        Ok(CoverageDto {
            schedule_id: loaded.schedule.id,
            warnings: warnings.into_iter().map(CoverageWarningDto::from).collect(),
        })
    }

    /// Printable export of a schedule's roster
    pub async fn print_roster(
        &self,
        caller: &Caller,
        schedule_id: i32,
    ) -> Result<RosterDocument, Error> {
        caller.require(Permission::ViewSchedule)?;

        let (schedule, grid) = self.materialized_grid(schedule_id).await?;
        let renderer = HtmlRosterDocument::new(self.locale);

        Ok(RosterDocument {
            filename: REPORT_FILENAME,
            content_type: renderer.content_type(),
            body: renderer.render(&schedule, &grid),
        })
    }

    async fn get_schedule(&self, schedule_id: i32) -> Result<ScheduleModel, Error> {
        ScheduleRepository::new(self.db)
            .get_by_id(schedule_id)
            .await?
            .ok_or(Error::not_found("Schedule", schedule_id))
    }

    async fn materialized_grid(&self, schedule_id: i32) -> Result<(ScheduleModel, RosterGrid), Error> {
        let schedule = self.get_schedule(schedule_id).await?;
        self.materialize(&schedule).await?;

        let loaded = self.load(schedule).await?;
        let grid = self.grid(&loaded);

        Ok((loaded.schedule, grid))
    }

    async fn load(&self, schedule: ScheduleModel) -> Result<LoadedSchedule, Error> {
        let shifts = ShiftRepository::new(self.db)
            .get_many_by_schedule_id(schedule.id)
            .await?;
        let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();
        let slots = SlotRepository::new(self.db)
            .get_many_by_shift_ids(&shift_ids)
            .await?;

        let mut person_ids: Vec<i32> = slots.iter().filter_map(|slot| slot.person_id).collect();
        person_ids.sort_unstable();
        person_ids.dedup();
        let people = PersonRepository::new(self.db)
            .get_many_by_ids(&person_ids)
            .await?
            .into_iter()
            .map(|person| (person.id, person))
            .collect();

        Ok(LoadedSchedule {
            schedule,
            shifts,
            slots,
            people,
        })
    }

    fn grid(&self, loaded: &LoadedSchedule) -> RosterGrid {
        let days = schedule_days(loaded.schedule.start_day, loaded.schedule.end_date);

        build_roster(
            &days,
            order_shifts(loaded.shifts.clone()),
            &loaded.slots,
            &loaded.people,
            self.locale,
        )
    }

    fn to_roster_dto(&self, loaded: LoadedSchedule) -> RosterDto {
        let grid = self.grid(&loaded);

        roster_dto(loaded.schedule, grid)
    }
}
