//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI path metadata. Swagger UI serves the
//! collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so they land on the same axum route.
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let state = AppState::from(db);
/// let router = routes().with_state(state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Shiftboard", description = "Shiftboard API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session login and logout"),
        (name = controller::schedule::SCHEDULE_TAG, description = "Schedules, rosters, and coverage"),
        (name = controller::shift::SHIFT_TAG, description = "Shifts of a schedule"),
        (name = controller::person::PERSON_TAG, description = "Schedulable people"),
        (name = controller::group::GROUP_TAG, description = "Permission groups"),
        (name = controller::account::ACCOUNT_TAG, description = "Login accounts"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::schedule::list_schedules,
            controller::schedule::create_schedule
        ))
        .routes(routes!(
            controller::schedule::get_schedule,
            controller::schedule::delete_schedule
        ))
        .routes(routes!(
            controller::schedule::get_edit_schedule,
            controller::schedule::update_schedule_assignments
        ))
        .routes(routes!(controller::schedule::checkout_schedule))
        .routes(routes!(controller::schedule::print_schedule))
        .routes(routes!(controller::shift::create_shift))
        .routes(routes!(controller::shift::delete_shift))
        .routes(routes!(
            controller::person::list_people,
            controller::person::create_person
        ))
        .routes(routes!(
            controller::person::get_person,
            controller::person::update_person
        ))
        .routes(routes!(
            controller::group::list_groups,
            controller::group::create_group
        ))
        .routes(routes!(controller::account::create_account))
        .routes(routes!(controller::account::delete_account))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
