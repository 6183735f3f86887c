use salvo::{Depot, Request, Response, handler, writing::Json};

use cadence_core::model::Event;
use cadence_service::event::{EditScope, delete_event, update_event};
use cadence_store::store::seed::EventCollection;

use super::response::{DeleteResponse, render_error};
use crate::error::AppError;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// PUT /api/events/{id}?scope=single|all - replaces an event.
///
/// The body must be a complete event: fields are not merged into the stored
/// record, so a partial body is rejected with HTTP 400.
///
/// Whether the event belongs to a series is decided by the stored record,
/// not by the body. For a series member, `scope=single` detaches the
/// occurrence and `scope=all` applies the edit to the whole series. The
/// response lists every event written.
///
/// ## Errors
/// Returns HTTP 400 for an unknown scope or an invalid or partial event and
/// HTTP 404 if no event is stored under `id`.
#[handler]
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn update(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = req.param::<String>("id") else {
        return render_error(res, &AppError::BadRequest("missing event id".to_string()));
    };
    tracing::Span::current().record("id", id.as_str());

    let scope = match req
        .query::<String>("scope")
        .map(|raw| raw.parse::<EditScope>())
        .transpose()
    {
        Ok(scope) => scope,
        Err(err) => return render_error(res, &err.into()),
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(err) => return render_error(res, &err),
    };

    let edited: Event = match req.parse_json().await {
        Ok(event) => event,
        Err(e) => return render_error(res, &AppError::BadRequest(e.to_string())),
    };

    match update_event(store.as_ref(), &id, edited, scope).await {
        Ok(events) => res.render(Json(EventCollection { events })),
        Err(err) => render_error(res, &err.into()),
    }
}

/// ## Summary
/// DELETE /api/events/{id}
///
/// ## Errors
/// Returns HTTP 404 if no event has this id.
#[handler]
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn delete(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = req.param::<String>("id") else {
        return render_error(res, &AppError::BadRequest("missing event id".to_string()));
    };
    tracing::Span::current().record("id", id.as_str());

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(err) => return render_error(res, &err),
    };

    match delete_event(store.as_ref(), &id).await {
        Ok(()) => res.render(Json(DeleteResponse { success: true })),
        Err(err) => render_error(res, &err.into()),
    }
}
