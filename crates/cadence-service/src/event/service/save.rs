use cadence_core::model::{Event, EventDraft};
use cadence_recur::OccurrenceGenerator;
use cadence_store::store::EventStore;

use super::{BatchWrite, write_sequentially};
use crate::error::ServiceResult;
use crate::event::validation::{check_repeat_end_date, validate_draft};

/// ## Summary
/// Saves a new event from a draft, expanding it into a series when it repeats.
///
/// A non-repeating draft is stored as one event. A repeating draft is
/// expanded by `generator` and each occurrence is created in date order. An
/// expansion with no occurrences (end date before start) saves nothing and
/// succeeds.
///
/// ## Side Effects
/// - Creates one store entry per returned event
///
/// ## Errors
/// Returns `ValidationError` for an invalid draft, the store error for a
/// failed single save, and `BatchInterrupted` when a series save fails part
/// way; occurrences created before the failure remain stored.
#[tracing::instrument(skip(store, generator, draft), fields(
    title = %draft.title,
    date = %draft.date,
    periodicity = %draft.repeat.periodicity,
))]
pub async fn save_event(
    store: &dyn EventStore,
    generator: &OccurrenceGenerator,
    draft: &EventDraft,
) -> ServiceResult<Vec<Event>> {
    validate_draft(draft)?;

    if !draft.repeat.is_repeating() {
        let mut stored = Vec::with_capacity(1);
        for event in generator.generate(draft) {
            stored.push(store.create(event).await?);
        }
        tracing::info!("Saved single event");
        return Ok(stored);
    }

    if let Some(issue) = check_repeat_end_date(&draft.repeat, draft.date, generator.horizon()) {
        tracing::warn!(%issue, "Repeat end date out of range, saving what the horizon allows");
    }

    let occurrences = generator.generate(draft);
    if occurrences.is_empty() {
        tracing::info!("Series has no occurrences, nothing to save");
        return Ok(Vec::new());
    }

    let stored = write_sequentially(store, occurrences, BatchWrite::Create).await?;
    tracing::info!(count = stored.len(), "Saved repeating event");
    Ok(stored)
}

/// ## Summary
/// Stores an already-formed event as is, keeping its id if it has one.
///
/// ## Errors
/// Returns `ValidationError` for an invalid draft, or the store error.
#[tracing::instrument(skip(store, event), fields(id = %event.id, date = %event.date()))]
pub async fn create_event(store: &dyn EventStore, event: Event) -> ServiceResult<Event> {
    validate_draft(&event.draft)?;
    Ok(store.create(event).await?)
}
