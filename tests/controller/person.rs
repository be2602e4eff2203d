use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::person::Title;
use shiftboard::{
    model::{
        api::ValidationErrorDto,
        person::{CreatePersonDto, PersonDto},
    },
    server::controller::person::{create_person, get_person, list_people},
};

use super::*;

/// Expect 201 with a person linked to a new account
#[tokio::test]
async fn creates_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_with("hr", &["add_person"]).await?;
    let state = test.app_state();

    let result = create_person(
        State(state.clone()),
        test.session.clone(),
        Json(CreatePersonDto {
            username: "jkowalski".to_string(),
            password: "secret".to_string(),
            name: "Jan Kowalski".to_string(),
            title: Title::Technician,
            group_ids: Vec::new(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let person: PersonDto = json_body(resp).await;
    assert!(person.account_id.is_some());
    assert_eq!(person.title_abbreviation, "Tech.");

    let people: Vec<PersonDto> = json_body(
        list_people(State(state), test.session.clone())
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(people, vec![person]);

    Ok(())
}

/// Expect 422 listing every invalid field
#[tokio::test]
async fn rejects_invalid_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_superuser().await?;

    let result = create_person(
        State(test.app_state()),
        test.session.clone(),
        Json(CreatePersonDto {
            username: "admin".to_string(),
            password: String::new(),
            name: "x".repeat(33),
            title: Title::Technician,
            group_ids: Vec::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ValidationErrorDto = json_body(resp).await;
    let fields: Vec<&str> = body.fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, vec!["username", "password", "name"]);

    Ok(())
}

/// Expect 404 for a person that does not exist
#[tokio::test]
async fn get_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_with("hr", &["change_person"]).await?;

    let result = get_person(State(test.app_state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
