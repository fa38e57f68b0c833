//! Mock index source for testing.
//!
//! Provides [`MockIndexSource`] for exercising the resolver without network
//! or filesystem access.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};

use crumbs_trail::PageLocation;

use crate::source::{FetchError, IndexSource};

#[derive(Debug, Clone)]
enum Response {
    Document(String),
    Status(u16),
}

/// In-memory [`IndexSource`] keyed by directory URL.
///
/// Directories without a configured response answer with HTTP 404.
///
/// # Example
///
/// ```ignore
/// use crumbs_resolve::{IndexSource, MockIndexSource};
///
/// let source = MockIndexSource::new()
///     .with_document("/repo/guide/", "<h1>User Guide</h1>")
///     .with_status("/repo/guide/api/", 500);
/// ```
#[derive(Debug, Default)]
pub struct MockIndexSource {
    responses: HashMap<String, Response>,
    requested: RwLock<Vec<String>>,
    calls: AtomicUsize,
}

impl MockIndexSource {
    /// Create a mock that answers 404 everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `directory`.
    #[must_use]
    pub fn with_document(mut self, directory: impl Into<String>, html: impl Into<String>) -> Self {
        self.responses
            .insert(directory.into(), Response::Document(html.into()));
        self
    }

    /// Fail `directory` with an HTTP status.
    #[must_use]
    pub fn with_status(mut self, directory: impl Into<String>, status: u16) -> Self {
        self.responses
            .insert(directory.into(), Response::Status(status));
        self
    }

    /// Number of fetches made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Directories fetched so far, sorted.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        let mut requested = self
            .requested
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        requested.sort();
        requested
    }
}

impl IndexSource for MockIndexSource {
    fn address(&self, location: &PageLocation, directory: &str) -> String {
        location.join(&format!("{directory}index.html"))
    }

    fn fetch_index(&self, location: &PageLocation, directory: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(directory.to_owned());

        match self.responses.get(directory) {
            Some(Response::Document(html)) => Ok(html.clone()),
            Some(Response::Status(status)) => Err(FetchError::Status {
                url: self.address(location, directory),
                status: *status,
            }),
            None => Err(FetchError::Status {
                url: self.address(location, directory),
                status: 404,
            }),
        }
    }
}
