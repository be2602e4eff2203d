use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shiftboard::{
    model::account::{CurrentUserDto, LoginDto},
    server::{
        controller::auth::{get_user, login, logout},
        model::session::user::SessionUserId,
    },
};

use super::*;

fn credentials(password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: "anowak".to_string(),
        password: password.to_string(),
    })
}

/// Expect 200 with the current user and the account ID stored in session
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let account = test
        .person()
        .insert_account_with_permissions("anowak", &["view_schedule"])
        .await?;

    let result = login(State(test.app_state()), test.session.clone(), credentials("password")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: CurrentUserDto = json_body(resp).await;
    assert_eq!(user.id, account.id);
    assert_eq!(user.username, "anowak");
    assert_eq!(user.permissions.len(), 1);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(account.id));

    Ok(())
}

/// Expect 401 for a wrong password without touching the session
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    test.person().insert_account("anowak", false).await?;

    let result = login(State(test.app_state()), test.session.clone(), credentials("wrong")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect 204 after logout with an account in session, which is cleared
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    test.login_superuser().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect 204 after logout even without session data
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 200 with every permission for a superuser
#[tokio::test]
async fn returns_current_superuser() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let account_id = test.login_superuser().await?;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let user: CurrentUserDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(user.id, account_id);
    assert!(user.is_superuser);
    assert_eq!(user.permissions.len(), 11);

    Ok(())
}

/// Expect 401 when no account is in session
#[tokio::test]
async fn get_user_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and a cleared session when the account in session no longer exists
#[tokio::test]
async fn clears_session_of_deleted_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}
