pub mod merge;
pub mod report;
pub mod summarize;

pub use merge::merge;
pub use report::MergeReport;
pub use summarize::summarize;

use crate::engine::errors::CountOverflow;
use crate::engine::types::{IncomingEventRow, RunningTotalTable};

/// Folds one batch of raw events into `prior`, counting only `category`.
pub fn accumulate(
    prior: &RunningTotalTable,
    events: &[IncomingEventRow],
    category: &str,
) -> Result<(RunningTotalTable, MergeReport), CountOverflow> {
    let incremental = summarize(events, category);
    let report = MergeReport::between(prior, &incremental);
    Ok((merge(prior, &incremental)?, report))
}
