use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        schedule::{
            CoverageDto, CreateScheduleDto, EditRosterDto, RosterDto, ScheduleDto,
            UpdateAssignmentsDto,
        },
    },
    server::{
        controller::util::get_caller::get_caller_from_session,
        error::Error,
        model::app::AppState,
        service::{roster::RosterService, schedule::ScheduleService},
    },
};

pub static SCHEDULE_TAG: &str = "schedule";

#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All schedules", body = Vec<ScheduleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing view_schedule", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let schedules = ScheduleService::new(&state.db, &state.materialization_locks)
        .list_schedules(&caller)
        .await?;

    Ok((StatusCode::OK, Json(schedules)))
}

/// Creates a schedule with a default main shift
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_schedule", body = ErrorDto),
        (status = 422, description = "Invalid input", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(schedule): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let schedule = ScheduleService::new(&state.db, &state.materialization_locks)
        .create_schedule(&caller, schedule)
        .await?;

    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Day-by-shift roster of a schedule, missing slots are created first
#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule roster", body = RosterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing view_schedule", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let roster = roster_service(&state)
        .get_roster(&caller, schedule_id)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Deletes a schedule with its shifts and slots
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing delete_schedule", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    ScheduleService::new(&state.db, &state.materialization_locks)
        .delete_schedule(&caller, schedule_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Editable roster with the people that can be assigned
#[utoipa::path(
    get,
    path = "/api/schedules/{id}/edit",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Editable roster", body = EditRosterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing change_schedule", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_edit_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let edit = roster_service(&state)
        .get_edit_roster(&caller, schedule_id)
        .await?;

    Ok((StatusCode::OK, Json(edit)))
}

/// Assigns people to slots, a `null` person clears the slot
#[utoipa::path(
    post,
    path = "/api/schedules/{id}/edit",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule ID")),
    request_body = UpdateAssignmentsDto,
    responses(
        (status = 200, description = "Roster after the update", body = RosterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing change_schedule", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 422, description = "Invalid assignments", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule_assignments(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(update): Json<UpdateAssignmentsDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let roster = roster_service(&state)
        .update_assignments(&caller, schedule_id, update)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Main shifts lacking a senior-qualified person
#[utoipa::path(
    get,
    path = "/api/schedules/{id}/checkout",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Coverage warnings", body = CoverageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing change_schedule", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn checkout_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let coverage = roster_service(&state)
        .check_coverage(&caller, schedule_id)
        .await?;

    Ok((StatusCode::OK, Json(coverage)))
}

/// Printable roster as an HTML attachment
#[utoipa::path(
    get,
    path = "/api/schedules/{id}/print",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Roster document", content_type = "text/html", body = String),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing view_schedule", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn print_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let document = roster_service(&state)
        .print_roster(&caller, schedule_id)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        document.body,
    ))
}

fn roster_service(state: &AppState) -> RosterService<'_> {
    RosterService::new(&state.db, &state.materialization_locks, state.locale)
}
