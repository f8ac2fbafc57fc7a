pub mod batch_reader;
pub mod errors;
pub mod totals_store;

pub use batch_reader::BatchReader;
pub use errors::StoreError;
pub use totals_store::TotalsStore;
