use thiserror::Error;

use crate::engine::types::EntityKey;

/// A count grew past `u64::MAX`. Nothing was written back to the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("count for id {} ({}) overflows: {current} + {added}", .key.id, .key.name)]
pub struct CountOverflow {
    pub key: EntityKey,
    pub current: u64,
    pub added: u64,
}
