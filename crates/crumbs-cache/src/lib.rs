//! Caching of fetched index documents.
//!
//! Many pages of one site share the same intermediate directories, so their
//! index documents are worth fetching once. A [`Cache`] hands out named
//! [`CacheBucket`]s; the resolver keeps its documents in the `index` bucket.
//!
//! Backends:
//!
//! - [`NullCache`]: stores nothing, used with `--no-cache`
//! - [`MemoryCache`]: lives for one process, shared by all handles to a bucket
//! - [`FileCache`]: persists under `.crumbs/cache`, wiped when the version changes
//!
//! ```
//! use crumbs_cache::{Cache, MemoryCache, NullCache};
//!
//! let memory = MemoryCache::new();
//! memory.bucket("index").set("guide", b"<h1>Guide</h1>");
//! assert_eq!(
//!     memory.bucket("index").get("guide"),
//!     Some(b"<h1>Guide</h1>".to_vec())
//! );
//!
//! let null = NullCache;
//! null.bucket("index").set("guide", b"<h1>Guide</h1>");
//! assert_eq!(null.bucket("index").get("guide"), None);
//! ```

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

/// Key-value storage for one kind of cached data.
///
/// Entries are never validated: a stored value is a hit until the backend
/// forgets it.
pub trait CacheBucket: Send + Sync {
    /// Look up `key`.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: &[u8]);
}

/// Source of [`CacheBucket`]s.
///
/// Buckets with different names never see each other's keys. Two handles for
/// the same name read and write the same entries.
pub trait Cache: Send + Sync {
    /// Handle to the bucket called `name`.
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket>;
}

/// Bucket that forgets everything it is given.
pub struct NullCacheBucket;

impl CacheBucket for NullCacheBucket {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn set(&self, _key: &str, _value: &[u8]) {}
}

/// Cache used when caching is turned off.
pub struct NullCache;

impl Cache for NullCache {
    fn bucket(&self, _name: &str) -> Box<dyn CacheBucket> {
        Box::new(NullCacheBucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_bucket_never_hits() {
        let bucket = NullCache.bucket("index");

        bucket.set("abc123", b"<h1>Guide</h1>");
        assert_eq!(bucket.get("abc123"), None);
    }
}
