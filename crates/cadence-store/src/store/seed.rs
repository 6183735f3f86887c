//! Loading initial events from a JSON file.

use std::path::Path;

use cadence_core::model::Event;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// On-disk shape of a seed file, identical to the `GET /api/events` body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EventCollection {
    pub events: Vec<Event>,
}

/// ## Summary
/// Parses a seed document of the form `{"events": [...]}`.
///
/// ## Errors
/// Returns an error if the document is not valid JSON or an event is malformed.
pub fn parse_seed(json: &str) -> StoreResult<Vec<Event>> {
    let collection: EventCollection = serde_json::from_str(json)?;
    Ok(collection.events)
}

/// ## Summary
/// Reads and parses a seed file.
///
/// ## Errors
/// Returns an error if the file cannot be read or parsed.
#[tracing::instrument(fields(path = %path.display()))]
pub async fn load_seed_file(path: &Path) -> StoreResult<Vec<Event>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let events = parse_seed(&raw)?;
    tracing::info!(count = events.len(), "Loaded seed events");
    Ok(events)
}
