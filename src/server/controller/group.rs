use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        account::{CreateGroupDto, GroupDto},
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        controller::util::get_caller::get_caller_from_session, error::Error,
        model::app::AppState, service::group::GroupService,
    },
};

pub static GROUP_TAG: &str = "group";

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups with their permissions", body = Vec<GroupDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let groups = GroupService::new(&state.db).list_groups(&caller).await?;

    Ok((StatusCode::OK, Json(groups)))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_group", body = ErrorDto),
        (status = 422, description = "Invalid input", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Json(group): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let group = GroupService::new(&state.db)
        .create_group(&caller, group)
        .await?;

    Ok((StatusCode::CREATED, Json(group)))
}
