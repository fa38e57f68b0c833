//! File-based cache implementation.
//!
//! [`FileCache`] keeps one file per entry, grouped into bucket directories:
//!
//! ```text
//! {root}/
//! +-- VERSION            # cache format/app version
//! +-- index/             # bucket "index"
//!     +-- 3f1c...        # entry: raw document bytes
//! ```
//!
//! A `VERSION` mismatch wipes the whole root on construction, so entries
//! written by an incompatible build are never read back.
//!
//! Writes go through a sibling temp file followed by a rename. Several rayon
//! workers may store the same key at once and readers must never observe a
//! half-written entry.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Cache, CacheBucket};

/// Distinguishes temp files written concurrently by one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File-based [`Cache`] rooted at a directory on disk.
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Open a file cache at `root`, wiping it when the stored version differs.
    ///
    /// Problems creating the directory are logged and otherwise ignored: a
    /// broken cache degrades to misses, it never fails the caller.
    #[must_use]
    pub fn new(root: PathBuf, version: &str) -> Self {
        validate_version(&root, version);
        Self { root }
    }

    /// Root directory of this cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Cache for FileCache {
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket> {
        Box::new(FileCacheBucket {
            dir: self.root.join(name),
        })
    }
}

struct FileCacheBucket {
    dir: PathBuf,
}

impl CacheBucket for FileCacheBucket {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.dir.join(key)).ok()
    }

    fn set(&self, key: &str, value: &[u8]) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::debug!("cache bucket {} unavailable: {e}", self.dir.display());
            return;
        }

        let target = self.dir.join(key);
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp = self
            .dir
            .join(format!(".{key}.{}.{seq}.tmp", std::process::id()));

        if fs::write(&temp, value).is_err() || fs::rename(&temp, &target).is_err() {
            let _ = fs::remove_file(&temp);
        }
    }
}

/// Ensure `root/VERSION` holds `version`, wiping the directory otherwise.
fn validate_version(root: &Path, version: &str) {
    let version_file = root.join("VERSION");

    match fs::read_to_string(&version_file) {
        Ok(stored) if stored == version => {
            tracing::debug!("cache version matches: {version}");
            return;
        }
        Ok(stored) => {
            tracing::info!("cache version changed ({stored} -> {version}), wiping cache");
        }
        Err(_) => {
            tracing::info!("initializing cache at {}", root.display());
        }
    }

    if root.exists()
        && let Err(e) = fs::remove_dir_all(root)
    {
        tracing::warn!("failed to remove cache directory: {e}");
    }
    if let Err(e) = fs::create_dir_all(root) {
        tracing::warn!("failed to create cache directory: {e}");
        return;
    }
    if let Err(e) = fs::write(&version_file, version) {
        tracing::warn!("failed to write cache VERSION file: {e}");
    }
}
