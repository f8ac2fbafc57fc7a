pub mod engine;
pub mod logging;
pub mod runner;
pub mod shared;
pub mod store;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
