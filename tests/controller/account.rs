use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use shiftboard::server::controller::account::delete_account;

use super::*;

/// Expect 422 when deleting the logged in account
#[tokio::test]
async fn refuses_to_delete_self() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    let account_id = test.login_superuser().await?;

    let result = delete_account(
        State(test.app_state()),
        test.session.clone(),
        Path(account_id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 204 when deleting another account
#[tokio::test]
async fn deletes_other_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;
    test.login_with("admin2", &["delete_user"]).await?;
    let other = test.person().insert_account("anowak", false).await?;

    let result = delete_account(State(test.app_state()), test.session.clone(), Path(other.id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}
