use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::model::GroupRecord;

/// What the persistence layer has to do to match an edited forest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Records to create or update
    pub upserts: Vec<GroupRecord>,

    /// Names of records to delete
    pub deletes: Vec<String>,
}

impl ChangeSet {
    /// An empty change set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when nothing needs persisting
    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.deletes.is_empty()
    }

    /// Total number of operations
    pub fn len(&self) -> usize {
        self.upserts.len() + self.deletes.len()
    }

    /// Names of the upserted records
    pub fn upserted_names(&self) -> Vec<&str> {
        self.upserts.iter().map(|record| record.name()).collect()
    }
}

/// Compare two flat snapshots by record name
///
/// Records in `after` that are new or differ from their namesake in `before`
/// become upserts, in `after` order. Names only present in `before` become
/// deletes, in `before` order.
pub fn diff_records(before: &[GroupRecord], after: &[GroupRecord]) -> ChangeSet {
    let previous: HashMap<&str, &GroupRecord> =
        before.iter().map(|record| (record.name(), record)).collect();
    let current: HashSet<&str> = after.iter().map(|record| record.name()).collect();

    let upserts = after
        .iter()
        .filter(|record| previous.get(record.name()) != Some(record))
        .cloned()
        .collect();

    let mut deleted = HashSet::new();
    let deletes = before
        .iter()
        .map(|record| record.name())
        .filter(|name| !current.contains(name) && deleted.insert(*name))
        .map(str::to_string)
        .collect();

    ChangeSet { upserts, deletes }
}
