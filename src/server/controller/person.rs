use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        person::{CreatePersonDto, PersonDto, UpdatePersonDto},
    },
    server::{
        controller::util::get_caller::get_caller_from_session, error::Error,
        model::app::AppState, service::person::PersonService,
    },
};

pub static PERSON_TAG: &str = "person";

#[utoipa::path(
    get,
    path = "/api/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "All people ordered by name", body = Vec<PersonDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_person", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let people = PersonService::new(&state.db).list_people(&caller).await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Creates a person together with their login account
#[utoipa::path(
    post,
    path = "/api/people",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing add_person", body = ErrorDto),
        (status = 422, description = "Invalid input", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    session: Session,
    Json(person): Json<CreatePersonDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let person = PersonService::new(&state.db)
        .create_person(&caller, person)
        .await?;

    Ok((StatusCode::CREATED, Json(person)))
}

#[utoipa::path(
    get,
    path = "/api/people/{id}",
    tag = PERSON_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person", body = PersonDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing change_person", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    session: Session,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let person = PersonService::new(&state.db)
        .get_person(&caller, person_id)
        .await?;

    Ok((StatusCode::OK, Json(person)))
}

#[utoipa::path(
    put,
    path = "/api/people/{id}",
    tag = PERSON_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    request_body = UpdatePersonDto,
    responses(
        (status = 200, description = "Person updated", body = PersonDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing change_person", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 422, description = "Invalid input", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    session: Session,
    Path(person_id): Path<i32>,
    Json(person): Json<UpdatePersonDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller_from_session(&state, &session).await?;

    let person = PersonService::new(&state.db)
        .update_person(&caller, person_id, person)
        .await?;

    Ok((StatusCode::OK, Json(person)))
}
