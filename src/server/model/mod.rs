//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, the authenticated [`caller::Caller`], and session data
//! structures.

pub mod app;
pub mod caller;
pub mod convert;
pub mod db;
pub mod session;
