use crate::engine::types::IncomingEventRow;
use crate::store::errors::StoreError;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw event batch stored as CSV with columns `id,name,exception`.
/// Other columns are ignored. Fields are taken verbatim, whitespace included.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReader {
    file_path: PathBuf,
}

impl BatchReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn read(&self) -> Result<Vec<IncomingEventRow>, StoreError> {
        let file = match File::open(&self.file_path) {
            Ok(f) => f,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::BatchNotFound(self.file_path.clone()));
            }
            Err(e) => return Err(StoreError::io(&self.file_path, e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let events = reader
            .deserialize::<IncomingEventRow>()
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Read {} events from {}",
            events.len(),
            self.file_path.display()
        );
        Ok(events)
    }
}
