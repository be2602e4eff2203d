use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::shift::ShiftType;
use shiftboard::{
    model::schedule::{CreateShiftDto, ShiftDto},
    server::controller::shift::{create_shift, delete_shift, DeletedShiftDto},
};

use super::*;

/// Expect 201 with the default capacity when none is submitted
#[tokio::test]
async fn creates_shift() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let (schedule, _) = test.schedule().insert_week_one().await?;
    test.login_with("planner", &["add_shift"]).await?;

    let result = create_shift(
        State(test.app_state()),
        test.session.clone(),
        Json(CreateShiftDto {
            schedule_id: schedule.id,
            name: "Evening".to_string(),
            shift_type: ShiftType::Secondary,
            start_time: factory::time(16, 0),
            end_time: factory::time(22, 0),
            capacity: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let shift: ShiftDto = json_body(resp).await;
    assert_eq!(shift.capacity, 3);

    Ok(())
}

/// Expect 200 with the owning schedule's ID after deleting a shift
#[tokio::test]
async fn deletes_shift() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let (schedule, shift) = test.schedule().insert_week_one().await?;
    test.login_with("planner", &["delete_shift"]).await?;

    let result = delete_shift(State(test.app_state()), test.session.clone(), Path(shift.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: DeletedShiftDto = json_body(resp).await;
    assert_eq!(deleted.schedule_id, schedule.id);

    Ok(())
}

/// Expect 404 when deleting a shift that does not exist
#[tokio::test]
async fn delete_missing_shift() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_superuser().await?;

    let result = delete_shift(State(test.app_state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
