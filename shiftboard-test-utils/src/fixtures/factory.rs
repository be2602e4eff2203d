use chrono::{NaiveDate, NaiveTime};
use entity::{person::Title, shift::ShiftType};

/// Name given to shifts created by [`mock_shift`]
pub const MOCK_SHIFT_NAME: &str = "First shift";

/// # Panics
/// Panics on an invalid calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// # Panics
/// Panics on an invalid time of day.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn mock_schedule(
    id: i32,
    name: &str,
    start_day: NaiveDate,
    end_date: NaiveDate,
) -> entity::schedule::Model {
    entity::schedule::Model {
        id,
        name: name.to_string(),
        start_day,
        end_date,
    }
}

pub fn mock_shift(
    id: i32,
    schedule_id: i32,
    shift_type: ShiftType,
    start_time: NaiveTime,
    end_time: NaiveTime,
    capacity: i32,
) -> entity::shift::Model {
    entity::shift::Model {
        id,
        schedule_id,
        name: MOCK_SHIFT_NAME.to_string(),
        shift_type,
        start_time,
        end_time,
        capacity,
    }
}

pub fn mock_slot(
    id: i32,
    shift_id: i32,
    date: NaiveDate,
    position: i32,
    person_id: Option<i32>,
) -> entity::slot::Model {
    entity::slot::Model {
        id,
        shift_id,
        date,
        position,
        person_id,
    }
}

pub fn mock_person(id: i32, name: &str, title: Title) -> entity::person::Model {
    entity::person::Model {
        id,
        account_id: None,
        name: name.to_string(),
        title,
    }
}
