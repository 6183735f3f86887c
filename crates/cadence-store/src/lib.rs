//! Event persistence: the [`store::EventStore`] collection interface and its
//! in-memory implementation.

pub mod error;
pub mod store;
