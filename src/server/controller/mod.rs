//! HTTP controller endpoints for the shiftboard JSON API.
//!
//! Controllers resolve the session into a [`Caller`](crate::server::model::caller::Caller),
//! hand the request to a service, and turn the result into a response. Every handler carries
//! a utoipa annotation collected into the OpenAPI document served at `/api/docs`.

pub mod account;
pub mod auth;
pub mod group;
pub mod person;
pub mod schedule;
pub mod shift;
pub mod util;
