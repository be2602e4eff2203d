//! Server application core modules.
//!
//! This module contains the backend of the shiftboard service: HTTP routing, session based
//! authentication, permission checks, database access, and the roster core that materializes
//! slots, checks coverage, and lays schedules out as day-by-shift grids.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod roster;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
