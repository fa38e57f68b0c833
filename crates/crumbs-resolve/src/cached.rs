//! Caching decorator for index sources.

use crumbs_cache::{Cache, CacheBucket};
use crumbs_trail::PageLocation;
use sha2::{Digest, Sha256};

use crate::source::{FetchError, IndexSource};

const BUCKET: &str = "index";

/// Wraps an [`IndexSource`] and remembers successful fetches.
///
/// Entries are keyed by the SHA-256 of the inner source's address. Failures
/// pass through uncached so a later run retries them.
pub struct CachedSource<S> {
    inner: S,
    bucket: Box<dyn CacheBucket>,
}

impl<S: IndexSource> CachedSource<S> {
    /// Wrap `inner` with the `index` bucket of `cache`.
    pub fn new(inner: S, cache: &dyn Cache) -> Self {
        Self {
            inner,
            bucket: cache.bucket(BUCKET),
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

fn cache_key(address: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(address.as_bytes());
    hex::encode(hasher.finalize())
}

impl<S: IndexSource> IndexSource for CachedSource<S> {
    fn address(&self, location: &PageLocation, directory: &str) -> String {
        self.inner.address(location, directory)
    }

    fn fetch_index(&self, location: &PageLocation, directory: &str) -> Result<String, FetchError> {
        let address = self.inner.address(location, directory);
        let key = cache_key(&address);

        if let Some(bytes) = self.bucket.get(&key) {
            match String::from_utf8(bytes) {
                Ok(html) => {
                    tracing::trace!(%address, "index cache hit");
                    return Ok(html);
                }
                Err(_) => tracing::debug!(%address, "ignoring non-UTF-8 cache entry"),
            }
        }

        let html = self.inner.fetch_index(location, directory)?;
        self.bucket.set(&key, html.as_bytes());
        Ok(html)
    }
}
