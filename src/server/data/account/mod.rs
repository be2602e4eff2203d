//! Account and group repositories.

pub mod account;
pub mod group;
