use crate::engine::errors::CountOverflow;
use crate::engine::types::{IncrementalCountTable, RunningTotalTable};

/// Full outer join of `prior` and `incremental` on (id, name). A key missing
/// from one side counts as zero on that side. Fails without a partial result
/// when a sum does not fit in `u64`.
pub fn merge(
    prior: &RunningTotalTable,
    incremental: &IncrementalCountTable,
) -> Result<RunningTotalTable, CountOverflow> {
    let mut merged = prior.clone();
    merged.absorb(incremental)?;
    Ok(merged)
}
