use salvo::{Response, writing::Json};
use serde::Serialize;

use crate::error::AppError;

/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `DELETE /api/events/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// ## Summary
/// Writes `err` as `{"error": ...}` with the status it maps to.
pub fn render_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, status = %status, "Request failed");
    } else {
        tracing::debug!(error = %err, status = %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: err.to_string(),
    }));
}
