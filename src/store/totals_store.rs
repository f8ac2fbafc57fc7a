use crate::engine::types::{RunningTotalRow, RunningTotalTable};
use crate::store::errors::StoreError;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Running totals persisted as a CSV file with columns `id,name,count`.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsStore {
    file_path: PathBuf,
}

impl TotalsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the totals. A missing or empty file is an empty table.
    pub fn load(&self) -> Result<RunningTotalTable, StoreError> {
        let file = match File::open(&self.file_path) {
            Ok(f) => f,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Running totals file {} not found, starting from empty totals",
                    self.file_path.display()
                );
                return Ok(RunningTotalTable::new());
            }
            Err(e) => return Err(StoreError::io(&self.file_path, e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.deserialize::<RunningTotalRow>() {
            rows.push(record?);
        }

        let row_count = rows.len();
        let table = RunningTotalTable::from_rows(rows)?;
        if table.len() != row_count {
            warn!(
                "{} duplicate rows in {} were summed",
                row_count - table.len(),
                self.file_path.display()
            );
        }

        debug!(
            "Loaded {} running totals from {}",
            table.len(),
            self.file_path.display()
        );
        Ok(table)
    }

    /// Replaces the file with `table`. The rows are written to a sibling
    /// temporary file that is renamed over the target once complete.
    pub fn save(&self, table: &RunningTotalTable) -> Result<(), StoreError> {
        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        let tmp_path = tmp.path().to_path_buf();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            // Headers are written explicitly so an empty table still carries the schema
            writer.write_record(["id", "name", "count"])?;
            for row in table.rows() {
                writer.serialize(row)?;
            }
            writer.flush().map_err(|e| StoreError::io(&tmp_path, e))?;
        }
        tmp.as_file_mut()
            .sync_all()
            .map_err(|e| StoreError::io(&tmp_path, e))?;

        tmp.persist(&self.file_path)
            .map_err(|source| StoreError::Persist {
                path: self.file_path.clone(),
                source,
            })?;

        debug!(
            "Wrote {} running totals to {}",
            table.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
