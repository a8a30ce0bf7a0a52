//! File-backed session store.
//!
//! Entries live in a single flat JSON object (string keys, string values)
//! rewritten wholesale on every mutation. Survives process restarts; across
//! concurrent processes the last writer wins, with no locking.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::SessionStore;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file. The file and its parent
    /// directories are created lazily on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session file: {}", self.path.display()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        // Write to a sibling file and rename, so a crash mid-write cannot
        // leave a truncated session file behind
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write session file: {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace session file: {}", self.path.display()))
    }
}

impl SessionStore for FileStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "Clearing session file");
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
