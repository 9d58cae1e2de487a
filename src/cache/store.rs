//! Storage backends for [`crate::WeatherCache`].

use crate::cache::entry::CacheEntry;
use crate::cache::error::CacheError;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// A key-value store for cache entries.
///
/// `load` answers `None` for anything it cannot hand back intact; callers never learn why.
/// Staleness is not the store's concern, see [`crate::WeatherCache`].
pub trait CacheStore: fmt::Debug + Send + Sync {
    fn load(&self, key: &str) -> Option<CacheEntry>;

    fn store(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError>;

    /// The file backing `key`, for stores that keep one.
    fn entry_path(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

/// Stores each entry as `<dir>/<key>.json`.
///
/// Keys are used verbatim as file names. A key containing a path separator points into a
/// subdirectory that is never created, so writes for it fail.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `dir` as the cache directory. It is created on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Uses the default cache directory (see [`get_cache_dir`]). Like [`FileStore::new`],
    /// nothing touches the filesystem until the first write.
    pub fn in_default_dir() -> Self {
        Self::new(get_cache_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CacheStore for FileStore {
    fn load(&self, key: &str) -> Option<CacheEntry> {
        let path = self.path_for(key);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Cache file {} not readable: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Cache file {} is not a valid entry: {}", path.display(), e);
                None
            }
        }
    }

    fn store(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        ensure_cache_dir_exists(&self.dir)?;
        let path = self.path_for(key);
        let json = serde_json::to_vec(entry).map_err(CacheError::CacheEncode)?;

        // Write beside the target and rename over it, so readers see the old file or the
        // new one and nothing in between.
        let parent = path.parent().unwrap_or(&self.dir);
        let mut file =
            NamedTempFile::new_in(parent).map_err(|e| CacheError::CacheWrite(path.clone(), e))?;
        file.write_all(&json)
            .map_err(|e| CacheError::CacheWrite(path.clone(), e))?;
        file.persist(&path)
            .map_err(|e| CacheError::CacheWrite(path.clone(), e.error))?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        Some(self.path_for(key))
    }
}

/// Keeps entries in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn load(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn store(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), entry.clone());
        Ok(())
    }
}
