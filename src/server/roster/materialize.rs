//! Planning of missing slots.
//!
//! Every shift of a schedule needs `capacity` slots on each day of the schedule before the
//! roster can be shown. [`plan_missing_slots`] compares that target with the slots already
//! stored and returns the ones to create. The result only ever fills gaps, so running it again
//! after its output was persisted yields nothing.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::server::model::db::{ShiftModel, SlotModel};

/// A slot that should exist but has not been created yet
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotPlan {
    pub shift_id: i32,
    pub date: NaiveDate,
    pub position: i32,
}

/// Returns the slots missing for `shifts` on `days` given the `existing` slots.
///
/// For each (shift, day) the positions `0..capacity` not yet taken by an existing slot are
/// planned. Existing slots beyond the capacity are left alone.
pub fn plan_missing_slots(
    shifts: &[ShiftModel],
    days: &[NaiveDate],
    existing: &[SlotModel],
) -> Vec<SlotPlan> {
    let taken: HashSet<(i32, NaiveDate, i32)> = existing
        .iter()
        .map(|slot| (slot.shift_id, slot.date, slot.position))
        .collect();

    let mut plans = Vec::new();

    for shift in shifts {
        for day in days {
            for position in 0..shift.capacity {
                if !taken.contains(&(shift.id, *day, position)) {
                    plans.push(SlotPlan {
                        shift_id: shift.id,
                        date: *day,
                        position,
                    });
                }
            }
        }
    }

    plans
}
