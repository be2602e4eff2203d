//! Day-by-shift roster grid.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::server::{
    model::db::{PersonModel, ShiftModel, SlotModel},
    roster::locale::Locale,
};

/// Label shown for a slot nobody is assigned to
pub const UNASSIGNED_PLACEHOLDER: &str = "-------";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterGrid {
    /// Shifts in display order, one column each
    pub columns: Vec<ShiftModel>,
    /// One row per day of the schedule
    pub rows: Vec<RosterRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRow {
    pub date: NaiveDate,
    pub day_label: String,
    pub weekday_label: String,
    /// One cell per column, in column order
    pub cells: Vec<RosterCell>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterCell {
    pub shift_id: i32,
    /// Slots of the shift on this day, ordered by position
    pub entries: Vec<RosterEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub slot_id: i32,
    pub person_id: Option<i32>,
    pub label: String,
}

impl RosterGrid {
    /// Number of columns of the rendered table, including the day and weekday labels
    pub fn column_count(&self) -> usize {
        self.columns.len() + 2
    }
}

/// Lays `slots` out as one row per day in `days` and one cell per shift in `shifts`.
///
/// `shifts` must already be in display order, see
/// [`order_shifts`](crate::server::roster::ordering::order_shifts). Slots dated outside `days`
/// or belonging to other shifts are ignored.
pub fn build_roster(
    days: &[NaiveDate],
    shifts: Vec<ShiftModel>,
    slots: &[SlotModel],
    people: &HashMap<i32, PersonModel>,
    locale: Locale,
) -> RosterGrid {
    let mut by_cell: HashMap<(i32, NaiveDate), Vec<&SlotModel>> = HashMap::new();
    for slot in slots {
        by_cell.entry((slot.shift_id, slot.date)).or_default().push(slot);
    }
    for cell_slots in by_cell.values_mut() {
        cell_slots.sort_by_key(|slot| (slot.position, slot.id));
    }

    let rows = days
        .iter()
        .map(|day| RosterRow {
            date: *day,
            day_label: day.day().to_string(),
            weekday_label: locale.weekday_abbreviation(*day).to_string(),
            cells: shifts
                .iter()
                .map(|shift| RosterCell {
                    shift_id: shift.id,
                    entries: by_cell
                        .get(&(shift.id, *day))
                        .map(|cell_slots| {
                            cell_slots
                                .iter()
                                .map(|slot| roster_entry(slot, people))
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    RosterGrid {
        columns: shifts,
        rows,
    }
}

fn roster_entry(slot: &SlotModel, people: &HashMap<i32, PersonModel>) -> RosterEntry {
    let label = slot
        .person_id
        .and_then(|person_id| people.get(&person_id))
        .map(|person| person.name.clone())
        .unwrap_or_else(|| UNASSIGNED_PLACEHOLDER.to_string());

    RosterEntry {
        slot_id: slot.id,
        person_id: slot.person_id,
        label,
    }
}
