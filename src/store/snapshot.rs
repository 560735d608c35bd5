//! Serializable snapshots of a whole progress store.
//!
//! Snapshots let a host persist progress anywhere it likes: JSON for
//! readability, bincode for compactness.

use super::error::StoreError;
use crate::core::ProgressRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time copy of every record in a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Records keyed by guide id
    pub records: BTreeMap<String, ProgressRecord>,
}

impl ProgressSnapshot {
    pub fn new(records: BTreeMap<String, ProgressRecord>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            records,
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
        snapshot.validated()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
        snapshot.validated()
    }

    fn validated(self) -> Result<Self, StoreError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if let Some((key, record)) = self.records.iter().find(|(k, r)| **k != r.guide_id) {
            return Err(StoreError::ValidationFailed(format!(
                "record stored under '{}' belongs to guide '{}'",
                key, record.guide_id
            )));
        }

        Ok(self)
    }
}
