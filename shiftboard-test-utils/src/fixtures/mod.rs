//! Fixtures for inserting rows during test execution.
//!
//! - `factory` - in-memory models for tests of the pure roster core
//! - `person` - accounts, groups, and people
//! - `schedule` - schedules, shifts, and slots

pub mod factory;
pub mod person;
pub mod schedule;
