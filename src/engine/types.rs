use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use crate::engine::errors::CountOverflow;

/// Opaque entity identifier, kept exactly as read.
///
/// Ids that parse as integers sort numerically and ahead of the rest, so
/// `2` comes before `10`; other ids sort lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<i128> {
        self.0.parse().ok()
    }
}

impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Composite key of every count table. `id` is the stable key, `name` is
/// carried as display data but still takes part in equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub id: EntityId,
    pub name: String,
}

impl EntityKey {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One raw observation from an incoming batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingEventRow {
    pub id: EntityId,
    pub name: String,
    pub exception: String,
}

impl IncomingEventRow {
    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.id.clone(), self.name.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunningTotalRow {
    pub id: EntityId,
    pub name: String,
    pub count: u64,
}

impl RunningTotalRow {
    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.id.clone(), self.name.clone())
    }
}

/// Per-entity counts, ordered ascending by id then name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountTable {
    counts: BTreeMap<EntityKey, u64>,
}

/// Cumulative counts persisted between runs.
pub type RunningTotalTable = CountTable;

/// Counts contributed by a single batch. Entities without a matching row are absent.
pub type IncrementalCountTable = CountTable;

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_counts(counts: BTreeMap<EntityKey, u64>) -> Self {
        Self { counts }
    }

    /// Builds a table from rows; repeated keys are summed.
    pub fn from_rows<I>(rows: I) -> Result<Self, CountOverflow>
    where
        I: IntoIterator<Item = RunningTotalRow>,
    {
        let mut table = Self::new();
        for row in rows {
            table.add(EntityKey::new(row.id, row.name), row.count)?;
        }
        Ok(table)
    }

    /// Adds `count` to `key`, inserting it at zero when absent.
    pub fn add(&mut self, key: EntityKey, count: u64) -> Result<(), CountOverflow> {
        let current = self.counts.get(&key).copied().unwrap_or(0);
        let sum = current.checked_add(count).ok_or_else(|| CountOverflow {
            key: key.clone(),
            current,
            added: count,
        })?;
        self.counts.insert(key, sum);
        Ok(())
    }

    pub fn get(&self, key: &EntityKey) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &EntityKey> {
        self.counts.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, EntityKey, u64> {
        self.counts.iter()
    }

    /// Sum of every count in the table, widened so it cannot overflow.
    pub fn total(&self) -> u128 {
        self.counts.values().map(|c| u128::from(*c)).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = RunningTotalRow> + '_ {
        self.counts.iter().map(|(key, count)| RunningTotalRow {
            id: key.id.clone(),
            name: key.name.clone(),
            count: *count,
        })
    }

    /// Outer join with `other` in place: counts of shared keys are summed,
    /// keys only in `other` are inserted as-is. On overflow `self` is unchanged.
    pub fn absorb(&mut self, other: &CountTable) -> Result<(), CountOverflow> {
        let mut sums = Vec::with_capacity(other.counts.len());
        for (key, count) in &other.counts {
            let current = self.counts.get(key).copied().unwrap_or(0);
            let sum = current.checked_add(*count).ok_or_else(|| CountOverflow {
                key: key.clone(),
                current,
                added: *count,
            })?;
            sums.push((key.clone(), sum));
        }
        self.counts.extend(sums);
        Ok(())
    }

    /// Ids that appear under more than one name, with their names in order.
    pub fn conflicting_names(&self) -> Vec<(EntityId, Vec<String>)> {
        let mut by_id: BTreeMap<&EntityId, Vec<String>> = BTreeMap::new();
        for key in self.counts.keys() {
            by_id.entry(&key.id).or_default().push(key.name.clone());
        }
        by_id
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(id, names)| (id.clone(), names))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CountTable {
    type Item = (&'a EntityKey, &'a u64);
    type IntoIter = btree_map::Iter<'a, EntityKey, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
