use std::future::Future;
use std::pin::Pin;

use cadence_core::model::Event;

use crate::error::StoreResult;

pub mod memory;
pub mod seed;

pub use memory::InMemoryEventStore;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// A collection of events keyed by `id`.
///
/// Every call is independent: there are no multi-event transactions, so a
/// caller persisting a batch one event at a time sees each failure on its
/// own and keeps whatever was written before it.
pub trait EventStore: Send + Sync {
    /// All events, in insertion order.
    fn list(&self) -> StoreFuture<'_, Vec<Event>>;

    /// ## Errors
    /// `NotFound` if no event has this id.
    fn get<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Event>;

    /// Stores a new event. An empty `id` is replaced with a generated one.
    ///
    /// ## Errors
    /// `Conflict` if an event with the same id already exists.
    fn create(&self, event: Event) -> StoreFuture<'_, Event>;

    /// Replaces the event stored under `id`. The stored record keeps `id`
    /// regardless of the id inside `event`.
    ///
    /// ## Errors
    /// `NotFound` if no event has this id.
    fn update<'a>(&'a self, id: &'a str, event: Event) -> StoreFuture<'a, Event>;

    /// ## Errors
    /// `NotFound` if no event has this id.
    fn delete<'a>(&'a self, id: &'a str) -> StoreFuture<'a, ()>;
}
