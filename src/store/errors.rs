use crate::engine::errors::CountOverflow;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised by the CSV collaborators around the aggregation core.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Incoming batch file not found: {}", .0.display())]
    BatchNotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Running totals file holds an unrepresentable count: {0}")]
    Overflow(#[from] CountOverflow),

    #[error("Failed to replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn log_error(&self) {
        match self {
            StoreError::BatchNotFound(path) => {
                error!("Incoming batch file not found: {}", path.display());
            }
            StoreError::Io { path, source } => {
                error!("I/O error on {}: {}", path.display(), source);
                debug!("I/O error details: {:?}", source);
            }
            StoreError::Csv(e) => {
                error!("CSV error: {}", e);
                debug!("CSV error details: {:?}", e);
            }
            StoreError::Overflow(e) => {
                error!("Running totals file holds an unrepresentable count: {}", e);
            }
            StoreError::Persist { path, source } => {
                error!("Failed to replace {}: {}", path.display(), source);
                debug!("Persist error details: {:?}", source);
            }
        }
    }
}
