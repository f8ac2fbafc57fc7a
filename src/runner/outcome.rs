use crate::engine::{MergeReport, RunningTotalTable};
use crate::runner::errors::RunError;
use crate::store::StoreError;

/// Result of one run, as reported to the operator.
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing was merged or written.
    Aborted { reason: RunError },
    /// The merge ran. `persisted` tells whether the totals file was replaced.
    Completed {
        totals: RunningTotalTable,
        report: MergeReport,
        persisted: Result<(), StoreError>,
    },
}

impl RunOutcome {
    /// True when the totals were computed and written.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RunOutcome::Completed {
                persisted: Ok(()),
                ..
            }
        )
    }

    pub fn totals(&self) -> Option<&RunningTotalTable> {
        match self {
            RunOutcome::Completed { totals, .. } => Some(totals),
            RunOutcome::Aborted { .. } => None,
        }
    }
}
