use cadence_store::store::EventStore;

use crate::error::ServiceResult;

/// ## Summary
/// Deletes one event by id. Other members of its series are untouched.
///
/// ## Errors
/// Returns the store's `NotFound` error for an unknown id.
#[tracing::instrument(skip(store))]
pub async fn delete_event(store: &dyn EventStore, id: &str) -> ServiceResult<()> {
    store.delete(id).await?;
    tracing::info!("Event deleted");
    Ok(())
}
