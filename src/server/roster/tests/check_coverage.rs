use crate::server::roster::coverage::check_coverage;

use super::*;

/// Expect one warning per day for an unassigned main shift
#[test]
fn warns_for_every_uncovered_day() {
    let (days, shift) = week_one();
    let slots = open_slots(&shift, &days);

    let warnings = check_coverage(&days, &[shift], &slots, &HashMap::new());

    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings[0].to_string(),
        "2024-01-01 08:00 - 16:00 - no senior-qualified person on shift"
    );
    assert_eq!(warnings[1].date, factory::date(2024, 1, 2));
}

/// Expect a magister on one day to clear that day's warning only
#[test]
fn magister_covers_their_day() {
    let (days, shift) = week_one();
    let mut slots = open_slots(&shift, &days);
    slots[0].person_id = Some(1);

    let warnings = check_coverage(&days, &[shift], &slots, &people(vec![magister(1)]));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].date, factory::date(2024, 1, 2));
}

/// Expect unassigning the magister to restore the warning
#[test]
fn unassigning_restores_warning() {
    let (days, shift) = week_one();
    let mut slots = open_slots(&shift, &days);
    slots[0].person_id = Some(1);
    let staff = people(vec![magister(1)]);
    assert_eq!(check_coverage(&days, &[shift.clone()], &slots, &staff).len(), 1);

    slots[0].person_id = None;
    let warnings = check_coverage(&days, &[shift], &slots, &staff);

    assert_eq!(warnings.len(), 2);
}

/// Expect technicians not to satisfy the rule
#[test]
fn technician_does_not_cover() {
    let (days, shift) = week_one();
    let mut slots = open_slots(&shift, &days);
    slots[0].person_id = Some(2);
    slots[1].person_id = Some(2);

    let warnings = check_coverage(&days, &[shift], &slots, &people(vec![technician(2)]));

    assert_eq!(warnings.len(), 2);
}

/// Expect zero warnings when every main shift has a magister every day
#[test]
fn fully_covered_schedule_has_no_warnings() {
    let (days, shift) = week_one();
    let mut slots = open_slots(&shift, &days);
    slots[1].person_id = Some(1);
    slots[3].person_id = Some(1);

    let warnings = check_coverage(&days, &[shift], &slots, &people(vec![magister(1)]));

    assert!(warnings.is_empty());
}

/// Expect secondary shifts never to be checked
#[test]
fn secondary_shifts_are_ignored() {
    let (days, _) = week_one();
    let secondary = factory::mock_shift(
        2,
        1,
        ShiftType::Secondary,
        factory::time(16, 0),
        factory::time(22, 0),
        2,
    );
    let slots = open_slots(&secondary, &days);

    let warnings = check_coverage(&days, &[secondary], &slots, &HashMap::new());

    assert!(warnings.is_empty());
}
