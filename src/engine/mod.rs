pub mod aggregate;
pub mod errors;
pub mod types;

pub use aggregate::{MergeReport, accumulate, merge, summarize};
pub use errors::CountOverflow;
pub use types::{
    CountTable, EntityId, EntityKey, IncomingEventRow, IncrementalCountTable, RunningTotalRow,
    RunningTotalTable,
};
