//! HTTP surface of the cadence event service.

pub mod app;
pub mod error;
pub mod recurrence_handler;
pub mod store_handler;
