//! Event records exchanged between the engine, the store and the API.

mod event;
mod repeat;
mod time;

pub use event::{Event, EventDraft};
pub use repeat::{Periodicity, RepeatRule};
pub use time::TimeOfDay;
