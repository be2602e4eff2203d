//! SeaORM entities for the shiftboard database schema.

pub mod prelude;

pub mod account;
pub mod account_group;
pub mod account_group_membership;
pub mod group_permission;
pub mod person;
pub mod schedule;
pub mod shift;
pub mod slot;
