//! Event save, edit and delete workflows.
//!
//! Batches (the occurrences of a new series, or every member of a series
//! being edited) are written one event at a time, in order. A failure stops
//! the batch and leaves the events written before it in place.

use std::str::FromStr;

use cadence_core::model::Event;
use cadence_store::store::EventStore;

use crate::error::{ServiceError, ServiceResult};

mod delete;
mod save;
mod update;

pub use delete::delete_event;
pub use save::{create_event, save_event};
pub use update::update_event;

/// Which events an edit of a series member applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    /// Only the edited occurrence, which leaves its series.
    Single,
    /// Every event sharing the edited event's `repeat_parent_id`.
    All,
}

impl FromStr for EditScope {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "all" => Ok(Self::All),
            other => Err(ServiceError::ValidationError(format!(
                "unknown edit scope {other:?}, expected \"single\" or \"all\""
            ))),
        }
    }
}

/// ## Summary
/// Returns every stored event in insertion order.
///
/// ## Errors
/// Returns an error if the store cannot be read.
pub async fn list_events(store: &dyn EventStore) -> ServiceResult<Vec<Event>> {
    Ok(store.list().await?)
}

/// How each member of a batch is written.
#[derive(Debug, Clone, Copy)]
enum BatchWrite {
    Create,
    Update,
}

/// Writes `events` in order, stopping at the first failure.
async fn write_sequentially(
    store: &dyn EventStore,
    events: Vec<Event>,
    mode: BatchWrite,
) -> ServiceResult<Vec<Event>> {
    let total = events.len();
    let mut written = Vec::with_capacity(total);

    for event in events {
        let id = event.id.clone();
        let result = match mode {
            BatchWrite::Create => store.create(event).await,
            BatchWrite::Update => store.update(&id, event).await,
        };

        match result {
            Ok(stored) => written.push(stored),
            Err(source) => {
                tracing::error!(
                    id = %id,
                    saved = written.len(),
                    total,
                    error = %source,
                    "Batch write interrupted"
                );
                return Err(ServiceError::BatchInterrupted {
                    saved: written.len(),
                    total,
                    source,
                });
            }
        }
    }

    Ok(written)
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_scope_parsing() {
        assert_eq!("single".parse::<EditScope>().expect("valid"), EditScope::Single);
        assert_eq!("all".parse::<EditScope>().expect("valid"), EditScope::All);
        assert!(matches!(
            "every".parse::<EditScope>(),
            Err(ServiceError::ValidationError(_))
        ));
    }
}
