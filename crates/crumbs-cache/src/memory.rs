//! Process-local cache implementation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{Cache, CacheBucket};

type Entries = HashMap<String, Vec<u8>>;

/// In-memory [`Cache`] whose buckets live as long as the cache itself.
///
/// Bucket handles obtained for the same name share one map, so a value stored
/// through one handle is visible through every other handle.
#[derive(Default)]
pub struct MemoryCache {
    buckets: RwLock<HashMap<String, Arc<RwLock<Entries>>>>,
}

impl MemoryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for MemoryCache {
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket> {
        let existing = self
            .buckets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(Arc::clone);
        if let Some(entries) = existing {
            return Box::new(MemoryCacheBucket { entries });
        }

        let mut buckets = self.buckets.write().unwrap_or_else(PoisonError::into_inner);
        let entries = buckets.entry(name.to_owned()).or_default();
        Box::new(MemoryCacheBucket {
            entries: Arc::clone(entries),
        })
    }
}

struct MemoryCacheBucket {
    entries: Arc<RwLock<Entries>>,
}

impl CacheBucket for MemoryCacheBucket {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_entries() {
        let cache = MemoryCache::new();
        cache.bucket("index").set("guide", b"<h1>Guide</h1>");

        assert_eq!(
            cache.bucket("index").get("guide"),
            Some(b"<h1>Guide</h1>".to_vec())
        );
    }

    #[test]
    fn test_buckets_are_isolated() {
        let cache = MemoryCache::new();
        cache.bucket("index").set("key", b"index");
        cache.bucket("other").set("key", b"other");

        assert_eq!(cache.bucket("index").get("key"), Some(b"index".to_vec()));
        assert_eq!(cache.bucket("other").get("key"), Some(b"other".to_vec()));
        assert_eq!(cache.bucket("missing").get("key"), None);
    }

    #[test]
    fn test_poisoned_lock_still_serves_entries() {
        let cache = Arc::new(MemoryCache::new());
        cache.bucket("index").set("guide", b"<h1>Guide</h1>");

        let poisoner = Arc::clone(&cache);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.buckets.write().unwrap();
            panic!("poison the bucket map");
        })
        .join();
        assert!(result.is_err());
        assert!(cache.buckets.is_poisoned());

        let bucket = cache.bucket("index");
        assert_eq!(bucket.get("guide"), Some(b"<h1>Guide</h1>".to_vec()));
        bucket.set("api", b"<h1>API</h1>");
        assert_eq!(cache.bucket("index").get("api"), Some(b"<h1>API</h1>".to_vec()));
    }
}
