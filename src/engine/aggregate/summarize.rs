use std::collections::BTreeMap;

use crate::engine::types::{EntityKey, IncomingEventRow, IncrementalCountTable};

/// Counts, per (id, name), the events whose `exception` equals `category` exactly.
/// Entities with no matching event do not appear in the result.
pub fn summarize(events: &[IncomingEventRow], category: &str) -> IncrementalCountTable {
    // A count never exceeds events.len(), so it cannot overflow u64
    let mut counts: BTreeMap<EntityKey, u64> = BTreeMap::new();
    for event in events.iter().filter(|e| e.exception == category) {
        *counts.entry(event.key()).or_insert(0) += 1;
    }
    IncrementalCountTable::from_counts(counts)
}
