//! Event workflows on top of the recurrence engine and the event store:
//! saving single and repeating events, editing one occurrence or a whole
//! series, and deleting.

pub mod error;
pub mod event;
