use chrono::Duration;
use entity::shift::ShiftType;

use crate::{
    model::{permission::Permission, schedule::CreateScheduleDto},
    server::{
        data::{schedule::ScheduleRepository, shift::ShiftRepository, slot::SlotRepository},
        error::{auth::AuthError, Error},
        roster::{locale::Locale, lock::MaterializationLocks},
        service::{
            roster::RosterService,
            schedule::{
                ScheduleService, DEFAULT_SHIFT_CAPACITY, DEFAULT_SHIFT_NAME, MAX_SCHEDULE_DAYS,
            },
        },
    },
};

use super::*;

fn week_one_dto() -> CreateScheduleDto {
    CreateScheduleDto {
        name: " Week1 ".to_string(),
        start_day: factory::date(2024, 1, 1),
        end_date: factory::date(2024, 1, 2),
    }
}

/// Expect the schedule to be created with a default main shift
#[tokio::test]
async fn creates_schedule_with_main_shift() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();

    let schedule = ScheduleService::new(&test.db, &locks)
        .create_schedule(&superuser(), week_one_dto())
        .await
        .unwrap();

    assert_eq!(schedule.name, "Week1");
    let shifts = ShiftRepository::new(&test.db)
        .get_many_by_schedule_id(schedule.id)
        .await?;
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].name, DEFAULT_SHIFT_NAME);
    assert_eq!(shifts[0].shift_type, ShiftType::Main);
    assert_eq!(shifts[0].capacity, DEFAULT_SHIFT_CAPACITY);
    assert_eq!(shifts[0].start_time, factory::time(8, 0));
    assert_eq!(shifts[0].end_time, factory::time(16, 0));

    Ok(())
}

/// Expect ValidationError for a blank name and an end date before the start day
#[tokio::test]
async fn rejects_invalid_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();

    let result = ScheduleService::new(&test.db, &locks)
        .create_schedule(
            &superuser(),
            CreateScheduleDto {
                name: "  ".to_string(),
                start_day: factory::date(2024, 1, 2),
                end_date: factory::date(2024, 1, 1),
            },
        )
        .await;

    let Err(Error::ValidationError(errors)) = result else {
        panic!("expected validation error");
    };
    let fields: Vec<&str> = errors.fields().iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "end_date"]);
    assert!(ScheduleRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect a single-day schedule to be accepted
#[tokio::test]
async fn accepts_single_day_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();

    let result = ScheduleService::new(&test.db, &locks)
        .create_schedule(
            &superuser(),
            CreateScheduleDto {
                name: "Sunday".to_string(),
                start_day: factory::date(2024, 1, 7),
                end_date: factory::date(2024, 1, 7),
            },
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect PermissionDenied when the caller lacks add_schedule
#[tokio::test]
async fn create_requires_permission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();

    let result = ScheduleService::new(&test.db, &locks)
        .create_schedule(&caller_with(&[Permission::ViewSchedule]), week_one_dto())
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::PermissionDenied(
            Permission::AddSchedule
        )))
    ));

    Ok(())
}

/// Expect schedules listed in creation order for a caller with view_schedule
#[tokio::test]
async fn lists_schedules() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();
    let (week_one, _) = test.schedule().insert_week_one().await?;

    let schedules = ScheduleService::new(&test.db, &locks)
        .list_schedules(&caller_with(&[Permission::ViewSchedule]))
        .await
        .unwrap();

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].id, week_one.id);

    Ok(())
}

/// Expect deleting a schedule to remove its shifts and slots
#[tokio::test]
async fn delete_cascades_to_shifts_and_slots() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();
    let (schedule, shift) = test.schedule().insert_week_one().await?;
    RosterService::new(&test.db, &locks, Locale::default())
        .materialize(&schedule)
        .await
        .unwrap();

    ScheduleService::new(&test.db, &locks)
        .delete_schedule(&superuser(), schedule.id)
        .await
        .unwrap();

    assert!(ScheduleRepository::new(&test.db)
        .get_by_id(schedule.id)
        .await?
        .is_none());
    assert!(ShiftRepository::new(&test.db)
        .get_by_id(shift.id)
        .await?
        .is_none());
    assert!(SlotRepository::new(&test.db)
        .get_many_by_shift_ids(&[shift.id])
        .await?
        .is_empty());

    Ok(())
}

/// Expect NotFound when deleting a schedule that does not exist
#[tokio::test]
async fn delete_missing_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();

    let result = ScheduleService::new(&test.db, &locks)
        .delete_schedule(&superuser(), 1)
        .await;

    assert!(matches!(
        result,
        Err(Error::NotFound {
            resource: "Schedule",
            id: 1
        })
    ));
    assert_eq!(locks.tracked(), 0);

    Ok(())
}

/// Expect a deleted schedule to leave no materialization lock behind
#[tokio::test]
async fn delete_releases_lock_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();
    let (schedule, _) = test.schedule().insert_week_one().await?;
    RosterService::new(&test.db, &locks, Locale::default())
        .materialize(&schedule)
        .await
        .unwrap();
    assert_eq!(locks.tracked(), 1);

    ScheduleService::new(&test.db, &locks)
        .delete_schedule(&superuser(), schedule.id)
        .await
        .unwrap();

    assert_eq!(locks.tracked(), 0);

    Ok(())
}

/// Expect ValidationError for a schedule longer than the maximum span
#[tokio::test]
async fn rejects_schedule_longer_than_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let locks = MaterializationLocks::default();
    let start_day = factory::date(2024, 1, 1);
    let schedule_service = ScheduleService::new(&test.db, &locks);

    let too_long = schedule_service
        .create_schedule(
            &superuser(),
            CreateScheduleDto {
                name: "Decade".to_string(),
                start_day,
                end_date: start_day + Duration::days(MAX_SCHEDULE_DAYS),
            },
        )
        .await;
    let longest = schedule_service
        .create_schedule(
            &superuser(),
            CreateScheduleDto {
                name: "Three years".to_string(),
                start_day,
                end_date: start_day + Duration::days(MAX_SCHEDULE_DAYS - 1),
            },
        )
        .await;

    let Err(Error::ValidationError(errors)) = too_long else {
        panic!("expected validation error");
    };
    let fields: Vec<&str> = errors.fields().iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, vec!["end_date"]);
    assert!(longest.is_ok());

    Ok(())
}
