//! In-memory progress store.

use super::snapshot::ProgressSnapshot;
use super::ProgressStore;
use crate::core::ProgressRecord;
use std::collections::HashMap;
use tracing::debug;

/// Progress store with no durability, lifetime bound to the value itself.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, ProgressRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a previously captured snapshot.
    pub fn from_snapshot(snapshot: ProgressSnapshot) -> Self {
        Self {
            records: snapshot.records.into_iter().collect(),
        }
    }

    /// Capture every record into a serializable snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(
            self.records
                .iter()
                .map(|(id, record)| (id.clone(), record.clone()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn find_record(&self, guide_id: &str) -> Option<ProgressRecord> {
        self.records.get(guide_id).cloned()
    }

    fn put_record(&mut self, guide_id: &str, mut record: ProgressRecord) {
        // Records always carry the key they are stored under.
        if record.guide_id != guide_id {
            record.guide_id = guide_id.to_string();
        }
        debug!(guide_id, completed = record.completed_count(), "storing progress record");
        self.records.insert(guide_id.to_string(), record);
    }

    fn guide_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.records.keys().cloned().collect();
        ids.sort();
        ids
    }
}
