pub mod event_row_factory;

pub use event_row_factory::{EventRowFactory, events};
pub use total_row_factory::{TotalRowFactory, table};

#[cfg(test)]
mod event_row_factory_test;
#[cfg(test)]
mod total_row_factory_test;
