//! Local site directory source.

use std::path::{Path, PathBuf};

use crumbs_trail::{PageLocation, normalize_base_path};
use percent_encoding::percent_decode_str;

use crate::source::{FetchError, IndexSource};

/// Reads index documents from a built site on disk.
///
/// The site is served under `mount_path`, so the directory URL
/// `{mount_path}guide/` maps to `{site_dir}/guide/{index_document}`.
pub struct FsIndexSource {
    site_dir: PathBuf,
    mount_path: String,
    index_document: String,
}

impl FsIndexSource {
    /// Create a source for the site in `site_dir` served under `mount_path`.
    #[must_use]
    pub fn new(site_dir: PathBuf, mount_path: &str, index_document: impl Into<String>) -> Self {
        Self {
            site_dir,
            mount_path: normalize_base_path(mount_path),
            index_document: index_document.into(),
        }
    }

    /// Site root directory.
    #[must_use]
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// File path of the index document for `directory`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::OutsideSite`] when the directory is not below the
    /// mount path or contains `.`/`..` components after decoding.
    pub fn index_path(&self, directory: &str) -> Result<PathBuf, FetchError> {
        let outside = || FetchError::OutsideSite(directory.to_owned());

        let relative = directory
            .strip_prefix(&self.mount_path)
            .or_else(|| (directory == self.mount_path.trim_end_matches('/')).then_some(""))
            .ok_or_else(outside)?;

        let mut path = self.site_dir.clone();
        for component in relative.split('/').filter(|c| !c.is_empty()) {
            let decoded = percent_decode_str(component).decode_utf8_lossy();
            if decoded == "." || decoded == ".." || decoded.contains(['/', '\\']) {
                return Err(outside());
            }
            path.push(&*decoded);
        }
        path.push(&self.index_document);
        Ok(path)
    }
}

impl IndexSource for FsIndexSource {
    fn address(&self, _location: &PageLocation, directory: &str) -> String {
        match self.index_path(directory) {
            Ok(path) => path.display().to_string(),
            Err(_) => directory.to_owned(),
        }
    }

    fn fetch_index(&self, _location: &PageLocation, directory: &str) -> Result<String, FetchError> {
        let path = self.index_path(directory)?;
        let bytes = std::fs::read(&path).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|e| FetchError::Body {
            address: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
