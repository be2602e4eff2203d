use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use shiftboard::{
    model::schedule::{
        CoverageDto, CreateScheduleDto, RosterDto, ScheduleDto, SlotAssignmentDto,
        UpdateAssignmentsDto,
    },
    server::controller::schedule::{
        checkout_schedule, create_schedule, delete_schedule, get_schedule, list_schedules,
        print_schedule, update_schedule_assignments,
    },
};

use super::*;

fn week_one() -> Json<CreateScheduleDto> {
    Json(CreateScheduleDto {
        name: "Week1".to_string(),
        start_day: factory::date(2024, 1, 1),
        end_date: factory::date(2024, 1, 2),
    })
}

/// Expect 201 with the created schedule
#[tokio::test]
async fn creates_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_with("planner", &["add_schedule"]).await?;

    let result = create_schedule(State(test.app_state()), test.session.clone(), week_one()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let schedule: ScheduleDto = json_body(resp).await;
    assert_eq!(schedule.name, "Week1");

    Ok(())
}

/// Expect 403 when the account lacks add_schedule
#[tokio::test]
async fn create_forbidden_without_permission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_with("viewer", &["view_schedule"]).await?;

    let result = create_schedule(State(test.app_state()), test.session.clone(), week_one()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 422 when the end date is before the start day
#[tokio::test]
async fn create_rejects_reversed_dates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_superuser().await?;

    let result = create_schedule(
        State(test.app_state()),
        test.session.clone(),
        Json(CreateScheduleDto {
            name: "Week1".to_string(),
            start_day: factory::date(2024, 1, 2),
            end_date: factory::date(2024, 1, 1),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 401 when listing schedules without a session
#[tokio::test]
async fn list_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;

    let result = list_schedules(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the Week1 roster to have one row per day and two open slots per cell
#[tokio::test]
async fn returns_materialized_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let (schedule, _) = test.schedule().insert_week_one().await?;
    test.login_with("viewer", &["view_schedule"]).await?;

    let result = get_schedule(
        State(test.app_state()),
        test.session.clone(),
        Path(schedule.id),
    )
    .await;

    assert!(result.is_ok());
    let roster: RosterDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(roster.rows.len(), 2);
    assert_eq!(roster.columns.len(), 1);
    assert!(roster.rows.iter().all(|row| row.cells[0].entries.len() == 2));

    Ok(())
}

/// Expect 404 for a schedule that does not exist
#[tokio::test]
async fn get_missing_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_superuser().await?;

    let result = get_schedule(State(test.app_state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect assigning a magister through the edit route to clear one coverage warning
#[tokio::test]
async fn assignment_updates_coverage() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let (schedule, _) = test.schedule().insert_week_one().await?;
    let (_, magister) = test
        .person()
        .insert_person_with_account("anowak", "Anna Nowak", entity::person::Title::Magister)
        .await?;
    test.login_with("planner", &["view_schedule", "change_schedule"])
        .await?;
    let state = test.app_state();

    let roster: RosterDto = json_body(
        get_schedule(State(state.clone()), test.session.clone(), Path(schedule.id))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    let slot_id = roster.rows[0].cells[0].entries[0].slot_id;

    let result = update_schedule_assignments(
        State(state.clone()),
        test.session.clone(),
        Path(schedule.id),
        Json(UpdateAssignmentsDto {
            assignments: vec![SlotAssignmentDto {
                slot_id,
                person_id: Some(magister.id),
            }],
        }),
    )
    .await;
    assert!(result.is_ok());

    let coverage: CoverageDto = json_body(
        checkout_schedule(State(state), test.session.clone(), Path(schedule.id))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(coverage.warnings.len(), 1);
    assert_eq!(coverage.warnings[0].date, factory::date(2024, 1, 2));

    Ok(())
}

/// Expect the print route to return an HTML attachment named report.html
#[tokio::test]
async fn prints_roster_attachment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let (schedule, _) = test.schedule().insert_week_one().await?;
    test.login_with("viewer", &["view_schedule"]).await?;

    let result = print_schedule(
        State(test.app_state()),
        test.session.clone(),
        Path(schedule.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"report.html\""
    );
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    Ok(())
}

/// Expect 204 on delete and 404 when fetching the deleted schedule
#[tokio::test]
async fn deletes_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let (schedule, _) = test.schedule().insert_week_one().await?;
    test.login_superuser().await?;
    let state = test.app_state();

    let result = delete_schedule(State(state.clone()), test.session.clone(), Path(schedule.id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    let result = get_schedule(State(state), test.session.clone(), Path(schedule.id)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
