use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use cadence_core::model::EventDraft;
use cadence_service::event::save_event;
use cadence_store::store::seed::EventCollection;

use super::response::render_error;
use crate::error::AppError;
use crate::recurrence_handler::get_generator_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// POST /api/events/recurring - expands a draft into its occurrences up to
/// the configured horizon and stores them one by one.
///
/// A draft without a repeat rule is stored as a single event. A rule whose
/// end date precedes the start date yields an empty `events` list.
///
/// ## Errors
/// Returns HTTP 400 for a malformed or invalid draft and HTTP 500 if the
/// batch was interrupted; the error names how many occurrences were stored.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_recurring(req: &mut Request, depot: &Depot, res: &mut Response) {
    let (store, generator) = match (get_store_from_depot(depot), get_generator_from_depot(depot)) {
        (Ok(store), Ok(generator)) => (store, generator),
        (Err(err), _) | (_, Err(err)) => return render_error(res, &err),
    };

    let draft: EventDraft = match req.parse_json().await {
        Ok(draft) => draft,
        Err(e) => return render_error(res, &AppError::BadRequest(e.to_string())),
    };

    match save_event(store.as_ref(), &generator, &draft).await {
        Ok(events) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(EventCollection { events }));
        }
        Err(err) => render_error(res, &err.into()),
    }
}
