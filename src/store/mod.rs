//! Progress storage.
//!
//! A store owns the mapping from guide id to [`ProgressRecord`] and nothing
//! else. It knows nothing about step content and never validates records;
//! that is left to [`crate::progress::ProgressTracker`].
//!
//! Reads and writes are total. Stores that persist somewhere durable report
//! I/O problems from their own load/flush methods instead.

mod error;
mod file;
mod memory;
mod snapshot;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::{ProgressSnapshot, SNAPSHOT_VERSION};

use crate::core::ProgressRecord;

/// Key-value store of progress records keyed by guide id.
pub trait ProgressStore {
    /// Stored record for a guide, if one has ever been written.
    fn find_record(&self, guide_id: &str) -> Option<ProgressRecord>;

    /// Replace the record for a guide.
    fn put_record(&mut self, guide_id: &str, record: ProgressRecord);

    /// Ids of every guide with a stored record.
    fn guide_ids(&self) -> Vec<String>;

    /// Stored record for a guide, or a fresh default one.
    fn get_record(&self, guide_id: &str) -> ProgressRecord {
        self.find_record(guide_id)
            .unwrap_or_else(|| ProgressRecord::new(guide_id))
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for &mut S {
    fn find_record(&self, guide_id: &str) -> Option<ProgressRecord> {
        (**self).find_record(guide_id)
    }

    fn put_record(&mut self, guide_id: &str, record: ProgressRecord) {
        (**self).put_record(guide_id, record)
    }

    fn guide_ids(&self) -> Vec<String> {
        (**self).guide_ids()
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn find_record(&self, guide_id: &str) -> Option<ProgressRecord> {
        (**self).find_record(guide_id)
    }

    fn put_record(&mut self, guide_id: &str, record: ProgressRecord) {
        (**self).put_record(guide_id, record)
    }

    fn guide_ids(&self) -> Vec<String> {
        (**self).guide_ids()
    }
}
