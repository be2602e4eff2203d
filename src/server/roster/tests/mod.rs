mod check_coverage;

use std::collections::HashMap;

use chrono::NaiveDate;
use entity::{person::Title, shift::ShiftType};
use shiftboard_test_utils::prelude::*;

use crate::server::model::db::{PersonModel, ShiftModel, SlotModel};

/// "Week1": 2024-01-01 through 2024-01-02 with a single main shift of capacity 2
fn week_one() -> (Vec<NaiveDate>, ShiftModel) {
    let days = vec![factory::date(2024, 1, 1), factory::date(2024, 1, 2)];
    let shift = factory::mock_shift(
        1,
        1,
        ShiftType::Main,
        factory::time(8, 0),
        factory::time(16, 0),
        2,
    );

    (days, shift)
}

/// Open slots for every position of `shift` on every day, numbered from 1
fn open_slots(shift: &ShiftModel, days: &[NaiveDate]) -> Vec<SlotModel> {
    let mut slots = Vec::new();

    for day in days {
        for position in 0..shift.capacity {
            slots.push(factory::mock_slot(
                slots.len() as i32 + 1,
                shift.id,
                *day,
                position,
                None,
            ));
        }
    }

    slots
}

fn people(people: Vec<PersonModel>) -> HashMap<i32, PersonModel> {
    people.into_iter().map(|p| (p.id, p)).collect()
}

fn magister(id: i32) -> PersonModel {
    factory::mock_person(id, "Anna Nowak", Title::Magister)
}

fn technician(id: i32) -> PersonModel {
    factory::mock_person(id, "Jan Kowalski", Title::Technician)
}
