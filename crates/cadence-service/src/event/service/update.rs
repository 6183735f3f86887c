use cadence_core::model::{Event, EventDraft};
use cadence_store::store::EventStore;

use super::{BatchWrite, EditScope, write_sequentially};
use crate::error::ServiceResult;
use crate::event::validation::validate_draft;

/// ## Summary
/// Applies an edit to the event stored under `id`.
///
/// Series membership is taken from the stored record, never from `edited`.
/// When the stored event belongs to a series:
/// - [`EditScope::Single`] detaches the event from its series before saving;
/// - [`EditScope::All`] applies the edit to every member of the series, each
///   keeping its own id and date.
///
/// Without a scope, or for a standalone event, the stored record is replaced
/// and keeps its series membership.
///
/// ## Errors
/// Returns `ValidationError` for an invalid draft, the store's `NotFound` for
/// an unknown id, and `BatchInterrupted` when a series update fails part way.
#[tracing::instrument(skip(store, edited), fields(parent = tracing::field::Empty))]
pub async fn update_event(
    store: &dyn EventStore,
    id: &str,
    mut edited: Event,
    scope: Option<EditScope>,
) -> ServiceResult<Vec<Event>> {
    validate_draft(&edited.draft)?;

    let stored = store.get(id).await?;
    if let Some(parent_id) = &stored.repeat_parent_id {
        tracing::Span::current().record("parent", parent_id.as_str());
    }

    match (scope, stored.repeat_parent_id) {
        (Some(EditScope::Single), Some(_)) => {
            let updated = store.update(id, edited.detached()).await?;
            tracing::info!("Occurrence detached from its series");
            Ok(vec![updated])
        }
        (Some(EditScope::All), Some(parent_id)) => {
            update_series(store, &parent_id, &edited.draft).await
        }
        (_, parent_id) => {
            edited.repeat_parent_id = parent_id;
            let updated = store.update(id, edited).await?;
            tracing::info!("Event updated");
            Ok(vec![updated])
        }
    }
}

async fn update_series(
    store: &dyn EventStore,
    parent_id: &str,
    edited: &EventDraft,
) -> ServiceResult<Vec<Event>> {
    let members: Vec<Event> = store
        .list()
        .await?
        .into_iter()
        .filter(|e| e.repeat_parent_id.as_deref() == Some(parent_id))
        .map(|e| Event {
            draft: EventDraft {
                date: e.draft.date,
                ..edited.clone()
            },
            ..e
        })
        .collect();

    let updated = write_sequentially(store, members, BatchWrite::Update).await?;
    tracing::info!(count = updated.len(), "Series updated");
    Ok(updated)
}
