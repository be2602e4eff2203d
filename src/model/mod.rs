//! Request and response types shared by the HTTP API.

pub mod account;
pub mod api;
pub mod permission;
pub mod person;
pub mod schedule;
