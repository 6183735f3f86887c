use cadence_core::model::{Event, EventDraft, RepeatRule};
use chrono::NaiveDate;

use super::next::next_occurrence;
use crate::id::IdSource;

/// Last date a rule may produce: its end date, clamped to `horizon`.
#[must_use]
pub fn effective_end_date(rule: &RepeatRule, horizon: NaiveDate) -> NaiveDate {
    rule.end_date.map_or(horizon, |end| end.min(horizon))
}

/// ## Summary
/// Expands a draft into the ordered list of events it describes.
///
/// A non-repeating draft yields exactly one event with a fresh id and no
/// `repeat_parent_id`. A repeating draft yields one event per occurrence
/// date from the draft's date through [`effective_end_date`], each with its
/// own id and all sharing one freshly drawn `repeat_parent_id`. The result is
/// empty when the effective end date precedes the start date.
///
/// Every field other than `id`, `date` and `repeat_parent_id` is copied from
/// the draft unchanged.
#[must_use]
#[tracing::instrument(skip(draft, ids), fields(
    start = %draft.date,
    periodicity = %draft.repeat.periodicity,
    end_date = ?draft.repeat.end_date,
))]
pub fn generate_recurring_events<I>(draft: &EventDraft, horizon: NaiveDate, ids: &I) -> Vec<Event>
where
    I: IdSource + ?Sized,
{
    let periodicity = draft.repeat.periodicity;
    if !periodicity.is_repeating() {
        return vec![Event::single(ids.next_id(), draft.clone())];
    }

    let parent_id = ids.next_id();
    let start = draft.date;
    let end = effective_end_date(&draft.repeat, horizon);

    if end < start {
        tracing::debug!(%end, "Effective end date precedes start date, no occurrences");
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    let mut current = start;
    loop {
        tracing::trace!(date = %current, "Emitting occurrence");
        occurrences.push(Event::occurrence(ids.next_id(), draft, current, &*parent_id));

        match next_occurrence(current, periodicity, horizon) {
            Some(next) if next <= end => current = next,
            _ => break,
        }
    }

    tracing::debug!(
        count = occurrences.len(),
        repeat_parent_id = %parent_id,
        "Generated occurrences"
    );
    occurrences
}
