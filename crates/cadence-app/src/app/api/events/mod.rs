//! `/api/events`: the event collection, repeating-event creation, and
//! per-event edit and delete.

use salvo::Router;

use cadence_core::constants::{EVENTS_ROUTE_COMPONENT, RECURRING_ROUTE_COMPONENT};

mod collection;
mod item;
mod recurring;
mod response;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .get(collection::list)
        .post(collection::create)
        .push(Router::with_path(RECURRING_ROUTE_COMPONENT).post(recurring::create_recurring))
        .push(
            Router::with_path("{id}")
                .put(item::update)
                .delete(item::delete),
        )
}
