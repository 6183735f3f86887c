use salvo::http::StatusCode;
use thiserror::Error;

use cadence_core::error::CoreError;
use cadence_service::error::ServiceError;
use cadence_store::error::StoreError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// ## Summary
    /// Maps the error onto the HTTP status the API reports for it.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => service_status(err),
            Self::StoreError(err) => store_status(err),
            Self::CoreError(err) => core_status(err),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

fn service_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::StoreError(inner) => store_status(inner),
        ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ServiceError::BatchInterrupted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Conflict(_) => StatusCode::CONFLICT,
        StoreError::Io(_) | StoreError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::ParseError(_) => StatusCode::BAD_REQUEST,
        CoreError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
