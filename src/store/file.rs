//! File-backed key-value store: one JSON file per key.

use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreResult};
use crate::infra::{ensure_dir, read_text, write_text_atomic};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temporary file and an atomic rename, so a crash never
/// leaves a half-written collection behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the store's directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(read_text(&self.path_for(key))?)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        write_text_atomic(&self.path_for(key), value)?;
        Ok(())
    }
}
