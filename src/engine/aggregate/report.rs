use std::fmt;

use crate::engine::types::{IncrementalCountTable, RunningTotalTable};

/// Shape of a merge: how the keys of the two inputs relate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Keys present only in the incremental counts.
    pub inserted: usize,
    /// Keys present on both sides.
    pub updated: usize,
    /// Keys present only in the prior totals.
    pub carried: usize,
    /// Tracked events contributed by the batch.
    pub events_added: u128,
}

impl MergeReport {
    pub fn between(prior: &RunningTotalTable, incremental: &IncrementalCountTable) -> Self {
        let updated = incremental.keys().filter(|k| prior.contains(k)).count();
        Self {
            inserted: incremental.len() - updated,
            updated,
            carried: prior.len() - updated,
            events_added: incremental.total(),
        }
    }

    /// Number of entities in the merged table.
    pub fn entities(&self) -> usize {
        self.inserted + self.updated + self.carried
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} events added: {} new, {} updated, {} unchanged",
            self.events_added, self.inserted, self.updated, self.carried
        )
    }
}
