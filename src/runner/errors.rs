use thiserror::Error;
use tracing::error;

use crate::engine::CountOverflow;
use crate::store::StoreError;

/// Why a run stopped before writing anything.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Batch cannot be merged: {0}")]
    Overflow(#[from] CountOverflow),
}

impl RunError {
    pub fn log_error(&self) {
        match self {
            RunError::Store(e) => e.log_error(),
            RunError::Overflow(e) => error!("Batch cannot be merged: {}", e),
        }
    }
}
