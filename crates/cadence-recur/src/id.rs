//! Identifier sources for events and series.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cadence_core::config::IdFormat;
use uuid::Uuid;

/// Produces opaque identifiers, each distinct from every earlier one.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

impl<F> IdSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Random (version 4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Ids;

impl IdSource for UuidV4Ids {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Time-ordered (version 7) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdSource for UuidV7Ids {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Deterministic `prefix-N` identifiers counting up from 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}

/// ## Summary
/// Builds the id source selected by configuration.
#[must_use]
pub fn id_source_for(format: IdFormat) -> Arc<dyn IdSource> {
    match format {
        IdFormat::UuidV4 => Arc::new(UuidV4Ids),
        IdFormat::UuidV7 => Arc::new(UuidV7Ids),
    }
}
