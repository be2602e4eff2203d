use chrono::{NaiveDate, NaiveTime};
use entity::shift::ShiftType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::person::PersonDto;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub name: String,
    pub start_day: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub name: String,
    pub start_day: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShiftDto {
    pub id: i32,
    pub schedule_id: i32,
    pub name: String,
    #[schema(value_type = String, example = "main")]
    pub shift_type: ShiftType,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateShiftDto {
    pub schedule_id: i32,
    pub name: String,
    #[schema(value_type = String, example = "secondary")]
    pub shift_type: ShiftType,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Slots per day from 1 to 50, defaults to 3
    pub capacity: Option<i32>,
}

/// Day-by-shift roster of a schedule
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterDto {
    pub schedule: ScheduleDto,
    /// One column per shift, in display order
    pub columns: Vec<ShiftDto>,
    /// One row per day of the schedule
    pub rows: Vec<RosterRowDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterRowDto {
    pub date: NaiveDate,
    /// Day of month without leading zero
    pub day_label: String,
    /// Localized weekday abbreviation
    pub weekday_label: String,
    pub cells: Vec<RosterCellDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterCellDto {
    pub shift_id: i32,
    pub entries: Vec<RosterEntryDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterEntryDto {
    pub slot_id: i32,
    pub person_id: Option<i32>,
    /// Assigned person's name or a placeholder for an open slot
    pub label: String,
}

/// Roster plus the people that can be assigned to its slots
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EditRosterDto {
    pub roster: RosterDto,
    pub assignable_people: Vec<PersonDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SlotAssignmentDto {
    pub slot_id: i32,
    /// `None` clears the slot
    pub person_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAssignmentsDto {
    pub assignments: Vec<SlotAssignmentDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CoverageWarningDto {
    pub date: NaiveDate,
    pub shift_id: i32,
    pub message: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CoverageDto {
    pub schedule_id: i32,
    pub warnings: Vec<CoverageWarningDto>,
}
