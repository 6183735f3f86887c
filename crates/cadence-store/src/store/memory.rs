//! In-memory event collection.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use cadence_core::model::Event;
use cadence_recur::IdSource;
use tokio::sync::RwLock;

use super::{EventStore, StoreFuture};
use crate::error::{StoreError, StoreResult};

/// Events in insertion order, indexed by id.
#[derive(Default)]
struct EventTable {
    ordered: BTreeMap<u64, Event>,
    slots: HashMap<String, u64>,
    next_slot: u64,
}

impl EventTable {
    fn insert(&mut self, event: Event) -> StoreResult<()> {
        if self.slots.contains_key(&event.id) {
            return Err(StoreError::Conflict(event.id));
        }

        let slot = self.next_slot;
        self.next_slot += 1;
        self.slots.insert(event.id.clone(), slot);
        self.ordered.insert(slot, event);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&Event> {
        let slot = self.slots.get(id)?;
        self.ordered.get(slot)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Event> {
        let slot = *self.slots.get(id)?;
        self.ordered.get_mut(&slot)
    }

    fn remove(&mut self, id: &str) -> Option<Event> {
        let slot = self.slots.remove(id)?;
        self.ordered.remove(&slot)
    }
}

/// Insertion-ordered events behind a read/write lock.
pub struct InMemoryEventStore {
    events: RwLock<EventTable>,
    ids: Arc<dyn IdSource>,
}

impl InMemoryEventStore {
    /// Creates an empty store that names id-less events with `ids`.
    #[must_use]
    pub fn new(ids: Arc<dyn IdSource>) -> Self {
        Self {
            events: RwLock::new(EventTable::default()),
            ids,
        }
    }

    /// ## Summary
    /// Creates a store pre-filled with `events`, kept in the given order.
    ///
    /// Events without an id get one from `ids`, exactly as [`EventStore::create`]
    /// would assign it.
    ///
    /// ## Errors
    /// Returns `Conflict` if two events share an id.
    pub fn with_events(events: Vec<Event>, ids: Arc<dyn IdSource>) -> StoreResult<Self> {
        let mut table = EventTable::default();
        for mut event in events {
            if event.id.is_empty() {
                event.id = ids.next_id();
            }
            table.insert(event)?;
        }

        Ok(Self {
            events: RwLock::new(table),
            ids,
        })
    }
}

impl std::fmt::Debug for InMemoryEventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventStore").finish_non_exhaustive()
    }
}

impl EventStore for InMemoryEventStore {
    fn list(&self) -> StoreFuture<'_, Vec<Event>> {
        Box::pin(async move {
            let events = self.events.read().await;
            Ok(events.ordered.values().cloned().collect())
        })
    }

    fn get<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Event> {
        Box::pin(async move {
            self.events
                .read()
                .await
                .get(id)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(id.to_string()))
        })
    }

    #[tracing::instrument(skip(self, event), fields(id = %event.id, date = %event.date()))]
    fn create(&self, mut event: Event) -> StoreFuture<'_, Event> {
        Box::pin(async move {
            if event.id.is_empty() {
                event.id = self.ids.next_id();
            }

            let mut events = self.events.write().await;
            if let Err(err) = events.insert(event.clone()) {
                tracing::warn!(id = %event.id, "Rejecting duplicate event id");
                return Err(err);
            }

            tracing::debug!(id = %event.id, "Event created");
            Ok(event)
        })
    }

    #[tracing::instrument(skip(self, event))]
    fn update<'a>(&'a self, id: &'a str, mut event: Event) -> StoreFuture<'a, Event> {
        Box::pin(async move {
            let mut events = self.events.write().await;
            let slot = events
                .get_mut(id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

            id.clone_into(&mut event.id);
            *slot = event.clone();
            tracing::debug!("Event updated");
            Ok(event)
        })
    }

    #[tracing::instrument(skip(self))]
    fn delete<'a>(&'a self, id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.events
                .write()
                .await
                .remove(id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

            tracing::debug!("Event deleted");
            Ok(())
        })
    }
}
