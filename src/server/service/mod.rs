//! Service layer for business logic.
//!
//! Services validate input, check the caller's permissions, and coordinate repositories and the
//! roster core. Every operation acting on behalf of a user takes the
//! [`Caller`](crate::server::model::caller::Caller) explicitly. Multi-row writes run inside a
//! single transaction.

pub mod account;
pub mod auth;
pub mod group;
pub mod person;
pub mod roster;
pub mod schedule;
pub mod shift;

#[cfg(test)]
mod tests;
