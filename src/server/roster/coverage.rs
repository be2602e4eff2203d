//! Coverage rule for main shifts.
//!
//! A main shift is covered on a day when at least one of its slots that day is assigned to a
//! person whose title is senior-qualified. Secondary shifts are never checked.

use std::{collections::HashMap, fmt};

use chrono::{NaiveDate, NaiveTime};
use entity::shift::ShiftType;

use crate::server::model::db::{PersonModel, ShiftModel, SlotModel};

/// A main shift lacking a senior-qualified person on one day
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageWarning {
    pub date: NaiveDate,
    pub shift_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl fmt::Display for CoverageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} - no senior-qualified person on shift",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
        )
    }
}

/// Lists one warning per (day, main shift) without a senior-qualified assignee.
///
/// Warnings are ordered by day, then by the order of `shifts`. `people` must hold every person
/// assigned to one of `slots`; an assignment to a person missing from the map counts as
/// unqualified.
pub fn check_coverage(
    days: &[NaiveDate],
    shifts: &[ShiftModel],
    slots: &[SlotModel],
    people: &HashMap<i32, PersonModel>,
) -> Vec<CoverageWarning> {
    let mut warnings = Vec::new();

    for day in days {
        for shift in shifts
            .iter()
            .filter(|shift| shift.shift_type == ShiftType::Main)
        {
            let covered = slots
                .iter()
                .filter(|slot| slot.shift_id == shift.id && slot.date == *day)
                .filter_map(|slot| slot.person_id)
                .filter_map(|person_id| people.get(&person_id))
                .any(|person| person.title.is_senior_qualified());

            if !covered {
                warnings.push(CoverageWarning {
                    date: *day,
                    shift_id: shift.id,
                    start_time: shift.start_time,
                    end_time: shift.end_time,
                });
            }
        }
    }

    warnings
}
