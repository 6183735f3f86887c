//! Cadence core: event domain types, configuration and shared constants.
//!
//! This crate has no I/O beyond configuration loading and is shared by the
//! recurrence engine, the store, the service layer and the HTTP app.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
