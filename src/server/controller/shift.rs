use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        schedule::{CreateShiftDto, ShiftDto},
    },
    server::{
        controller::util::get_caller::get_caller_from_session, error::Error,
        model::app::AppState, service::shift::ShiftService,
    },
};

pub static SHIFT_TAG: &str = "shift";

/// Schedule a deleted shift belonged to
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeletedShiftDto {
    pub schedule_id: i32,
}

/// Adds a shift to a schedule
#[utoipa::path(
    post,
    path = "/api/shifts",
    tag = SHIFT_TAG,
    request_body = CreateShiftDto,
    responses(
        (status = 201, description = "Shift created", body = ShiftDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_shift", body = ErrorDto),
        (status = 422, description = "Invalid input", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shift(
    State(state): State<AppState>,
    session: Session,
    Json(shift): Json<CreateShiftDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let shift = ShiftService::new(&state.db, &state.materialization_locks)
        .create_shift(&caller, shift)
        .await?;

    Ok((StatusCode::CREATED, Json(shift)))
}

/// Deletes a shift and its slots
#[utoipa::path(
    delete,
    path = "/api/shifts/{id}",
    tag = SHIFT_TAG,
    params(("id" = i32, Path, description = "Shift ID")),
    responses(
        (status = 200, description = "Shift deleted", body = DeletedShiftDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing delete_shift", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shift(
    State(state): State<AppState>,
    session: Session,
    Path(shift_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let schedule_id = ShiftService::new(&state.db, &state.materialization_locks)
        .delete_shift(&caller, shift_id)
        .await?;

    Ok((StatusCode::OK, Json(DeletedShiftDto { schedule_id })))
}
