//! Roster core.
//!
//! Pure functions that turn a schedule, its shifts, and its slots into the things the API
//! serves: the slots still missing for a schedule ([`materialize`]), coverage warnings for main
//! shifts without a senior-qualified person ([`coverage`]), and the day-by-shift grid shown on
//! screen and in the print export ([`grid`], [`document`]). None of these functions touch the
//! database; the service layer loads the records and persists the results.

pub mod coverage;
pub mod days;
pub mod document;
pub mod grid;
pub mod locale;
pub mod lock;
pub mod materialize;
pub mod ordering;

#[cfg(test)]
mod tests;
