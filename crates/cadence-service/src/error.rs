use thiserror::Error;

use cadence_store::error::StoreError;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A sequential batch stopped part way; the first `saved` writes persist.
    #[error("Batch interrupted after {saved} of {total} events: {source}")]
    BatchInterrupted {
        saved: usize,
        total: usize,
        #[source]
        source: StoreError,
    },
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
