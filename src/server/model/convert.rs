//! Conversions from database models and roster values into API DTOs.

use crate::{
    model::{
        account::CurrentUserDto,
        person::PersonDto,
        schedule::{
            CoverageWarningDto, RosterCellDto, RosterDto, RosterEntryDto, RosterRowDto,
            ScheduleDto, ShiftDto,
        },
    },
    server::{
        model::{
            caller::Caller,
            db::{PersonModel, ScheduleModel, ShiftModel},
        },
        roster::{coverage::CoverageWarning, grid::RosterGrid},
    },
};

impl From<Caller> for CurrentUserDto {
    fn from(caller: Caller) -> Self {
        let permissions = caller.permissions();

        Self {
            id: caller.account_id,
            username: caller.username,
            is_superuser: caller.is_superuser,
            permissions,
        }
    }
}

impl From<ScheduleModel> for ScheduleDto {
    fn from(schedule: ScheduleModel) -> Self {
        Self {
            id: schedule.id,
            name: schedule.name,
            start_day: schedule.start_day,
            end_date: schedule.end_date,
        }
    }
}

impl From<ShiftModel> for ShiftDto {
    fn from(shift: ShiftModel) -> Self {
        Self {
            id: shift.id,
            schedule_id: shift.schedule_id,
            name: shift.name,
            shift_type: shift.shift_type,
            start_time: shift.start_time,
            end_time: shift.end_time,
            capacity: shift.capacity,
        }
    }
}

impl From<PersonModel> for PersonDto {
    fn from(person: PersonModel) -> Self {
        Self {
            id: person.id,
            title_abbreviation: person.title.abbreviation().to_string(),
            name: person.name,
            title: person.title,
            account_id: person.account_id,
        }
    }
}

impl From<CoverageWarning> for CoverageWarningDto {
    fn from(warning: CoverageWarning) -> Self {
        Self {
            message: warning.to_string(),
            date: warning.date,
            shift_id: warning.shift_id,
        }
    }
}

/// Converts a roster grid into its DTO for `schedule`
pub fn roster_dto(schedule: ScheduleModel, grid: RosterGrid) -> RosterDto {
    RosterDto {
        schedule: schedule.into(),
        columns: grid.columns.into_iter().map(ShiftDto::from).collect(),
        rows: grid
            .rows
            .into_iter()
            .map(|row| RosterRowDto {
                date: row.date,
                day_label: row.day_label,
                weekday_label: row.weekday_label,
                cells: row
                    .cells
                    .into_iter()
                    .map(|cell| RosterCellDto {
                        shift_id: cell.shift_id,
                        entries: cell
                            .entries
                            .into_iter()
                            .map(|entry| RosterEntryDto {
                                slot_id: entry.slot_id,
                                person_id: entry.person_id,
                                label: entry.label,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
