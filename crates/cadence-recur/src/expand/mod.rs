//! Recurrence expansion for event drafts.
//!
//! Supports the four fixed periodicities (daily, weekly, monthly, yearly),
//! always advancing by a single unit.

mod calendar;
mod generate;
mod generator;
mod next;

pub use calendar::{days_in_month, is_leap_year};
pub use generate::{effective_end_date, generate_recurring_events};
pub use generator::OccurrenceGenerator;
pub use next::next_occurrence;
