use crate::cache::error::CacheError;
use log::debug;
use std::path::{Path, PathBuf};

pub(crate) const CACHE_DIR_NAME: &str = "weather-gopher";

/// Resolves `<root>/weather-gopher`, where `root` is the per-user cache directory or,
/// when the platform has none, the system temp directory.
pub fn get_cache_dir() -> PathBuf {
    cache_dir_under(dirs::cache_dir())
}

fn cache_dir_under(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| {
        let fallback = std::env::temp_dir();
        debug!(
            "No user cache directory available, falling back to {}",
            fallback.display()
        );
        fallback
    })
    .join(CACHE_DIR_NAME)
}

/// Creates `path` and its parents if missing. Succeeds if it already exists.
pub(crate) fn ensure_cache_dir_exists(path: &Path) -> Result<(), CacheError> {
    if path.is_dir() {
        return Ok(());
    }
    debug!("Creating cache directory: {}", path.display());
    std::fs::create_dir_all(path).map_err(|e| CacheError::CacheDirCreation(path.to_path_buf(), e))
}
