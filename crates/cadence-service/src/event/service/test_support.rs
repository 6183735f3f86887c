//! Shared fixtures for service tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cadence_core::model::{Event, EventDraft, RepeatRule, TimeOfDay};
use cadence_recur::OccurrenceGenerator;
use cadence_recur::id::SequentialIds;
use cadence_store::error::StoreError;
use cadence_store::store::{EventStore, InMemoryEventStore, StoreFuture};
use chrono::NaiveDate;

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

pub fn draft(on: &str, repeat: RepeatRule) -> EventDraft {
    EventDraft {
        title: "Weekly meeting".to_string(),
        date: date(on),
        start_time: TimeOfDay::from_hm(10, 0).expect("valid time"),
        end_time: TimeOfDay::from_hm(11, 0).expect("valid time"),
        description: "Team sync".to_string(),
        location: "Room A".to_string(),
        category: "work".to_string(),
        repeat,
        notification_time: 10,
    }
}

pub fn generator() -> OccurrenceGenerator {
    OccurrenceGenerator::new(date("2025-12-31"), Arc::new(SequentialIds::new("gen")))
}

/// In-memory store whose writes start failing after a fixed number succeed.
pub struct FlakyStore {
    inner: InMemoryEventStore,
    writes_left: AtomicUsize,
}

impl FlakyStore {
    pub fn reliable() -> Self {
        Self::failing_after(usize::MAX)
    }

    pub fn failing_after(writes: usize) -> Self {
        Self {
            inner: InMemoryEventStore::new(Arc::new(SequentialIds::new("store"))),
            writes_left: AtomicUsize::new(writes),
        }
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            inner: InMemoryEventStore::with_events(events, Arc::new(SequentialIds::new("store")))
                .expect("fixture events have unique ids"),
            writes_left: AtomicUsize::new(usize::MAX),
        }
    }

    pub fn fail_after(&self, writes: usize) {
        self.writes_left.store(writes, Ordering::SeqCst);
    }

    fn take_write(&self) -> Result<(), StoreError> {
        self.writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .map(|_| ())
            .map_err(|_exhausted| StoreError::Io(std::io::Error::other("simulated outage")))
    }
}

impl EventStore for FlakyStore {
    fn list(&self) -> StoreFuture<'_, Vec<Event>> {
        self.inner.list()
    }

    fn get<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Event> {
        self.inner.get(id)
    }

    fn create(&self, event: Event) -> StoreFuture<'_, Event> {
        match self.take_write() {
            Ok(()) => self.inner.create(event),
            Err(e) => Box::pin(async move { Err(e) }),
        }
    }

    fn update<'a>(&'a self, id: &'a str, event: Event) -> StoreFuture<'a, Event> {
        match self.take_write() {
            Ok(()) => self.inner.update(id, event),
            Err(e) => Box::pin(async move { Err(e) }),
        }
    }

    fn delete<'a>(&'a self, id: &'a str) -> StoreFuture<'a, ()> {
        self.inner.delete(id)
    }
}
