use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use cadence_core::model::Event;
use cadence_service::event::{create_event, list_events};
use cadence_store::store::seed::EventCollection;

use super::response::render_error;
use crate::error::AppError;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// GET /api/events - every stored event, in insertion order.
///
/// ## Errors
/// Returns HTTP 500 if the store is unavailable.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn list(depot: &Depot, res: &mut Response) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(err) => return render_error(res, &err),
    };

    match list_events(store.as_ref()).await {
        Ok(events) => res.render(Json(EventCollection { events })),
        Err(err) => render_error(res, &err.into()),
    }
}

/// ## Summary
/// POST /api/events - stores one event as given. An absent or empty `id` is
/// assigned by the store.
///
/// ## Errors
/// Returns HTTP 400 for a malformed or invalid event and HTTP 409 if the id
/// is already taken.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create(req: &mut Request, depot: &Depot, res: &mut Response) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(err) => return render_error(res, &err),
    };

    let event: Event = match req.parse_json().await {
        Ok(event) => event,
        Err(e) => return render_error(res, &AppError::BadRequest(e.to_string())),
    };

    match create_event(store.as_ref(), event).await {
        Ok(created) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(created));
        }
        Err(err) => render_error(res, &err.into()),
    }
}
