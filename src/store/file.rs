//! Progress store persisted as a JSON snapshot on disk.

use super::error::StoreError;
use super::memory::MemoryStore;
use super::snapshot::ProgressSnapshot;
use super::ProgressStore;
use crate::core::ProgressRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A [`MemoryStore`] backed by a snapshot file.
///
/// Writes land in memory immediately and reach disk on [`FileStore::flush`].
/// Flushing writes to a temporary sibling file and renames it over the
/// target, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
    dirty: bool,
}

impl FileStore {
    /// Open the snapshot at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let json = fs::read_to_string(&path).map_err(io_error(&path))?;
            let snapshot = ProgressSnapshot::from_json(&json)?;
            info!(
                path = %path.display(),
                guides = snapshot.records.len(),
                "loaded progress snapshot"
            );
            MemoryStore::from_snapshot(snapshot)
        } else {
            debug!(path = %path.display(), "no progress snapshot yet, starting empty");
            MemoryStore::new()
        };

        Ok(Self {
            path,
            inner,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if there are writes not yet flushed to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write pending changes to disk. Does nothing when clean.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        let json = self.inner.snapshot().to_json()?;
        let temp_path = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        fs::write(&temp_path, json).map_err(io_error(&temp_path))?;
        fs::rename(&temp_path, &self.path).map_err(io_error(&self.path))?;

        info!(path = %self.path.display(), guides = self.inner.len(), "flushed progress snapshot");
        self.dirty = false;
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

impl ProgressStore for FileStore {
    fn find_record(&self, guide_id: &str) -> Option<ProgressRecord> {
        self.inner.find_record(guide_id)
    }

    fn put_record(&mut self, guide_id: &str, record: ProgressRecord) {
        self.inner.put_record(guide_id, record);
        self.dirty = true;
    }

    fn guide_ids(&self) -> Vec<String> {
        self.inner.guide_ids()
    }
}
