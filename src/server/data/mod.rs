//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. Each is generic over [`sea_orm::ConnectionTrait`]
//! so the same repository runs against a plain connection or inside a transaction.

pub mod account;
pub mod person;
pub mod schedule;
pub mod shift;
pub mod slot;

/// Rows per multi-row INSERT and IDs per `IN (...)` list
pub const BATCH_SIZE: usize = 1000;
