//! Integration tests for the HTTP controllers, calling handlers directly with an in-memory
//! database and session.

mod account;
mod auth;
mod person;
mod schedule;
mod shift;

use shiftboard_test_utils::prelude::*;

use crate::{util::json_body, TestContextExt};
