//! Recurring-event date generation.
//!
//! [`expand::next_occurrence`] computes the single next date of a
//! recurrence and [`expand::generate_recurring_events`] turns an event draft
//! into the full, ordered list of its occurrences up to a horizon. Both are
//! pure: the horizon is a parameter and identifiers come from an injected
//! [`id::IdSource`].

pub mod expand;
pub mod id;

pub use expand::{
    OccurrenceGenerator, effective_end_date, generate_recurring_events, next_occurrence,
};
pub use id::IdSource;
