mod app_specific;
mod events;

use salvo::Router;

use cadence_core::constants::API_ROUTE_COMPONENT;

/// ## Summary
/// Constructs the API router: the app-specific endpoints and the event
/// collection.
///
/// ## Errors
/// Returns an error if any child route handler fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(events::routes()))
}
