//! Index document sources.
//!
//! A source turns a crumb's directory URL into the HTML of the index document
//! inside that directory. Failures are ordinary values here, the resolver
//! decides they are never fatal.

use std::path::PathBuf;

use crumbs_trail::PageLocation;

/// Error fetching an index document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure.
    #[error("request to {url} failed: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport error message.
        message: String,
    },
    /// Non-success HTTP status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },
    /// Body could not be read or is not UTF-8.
    #[error("unreadable response body from {address}: {message}")]
    Body {
        /// Requested address.
        address: String,
        /// Reason the body was rejected.
        message: String,
    },
    /// Local file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Directory URL does not map into the site.
    #[error("{0} is outside the site")]
    OutsideSite(String),
    /// HTTP fetch requested for a location without an origin.
    #[error("cannot fetch {0} without a page origin")]
    NoOrigin(String),
    /// Fetching is turned off.
    #[error("fetching disabled, skipped {0}")]
    Offline(String),
}

/// Provider of index documents for crumb directories.
pub trait IndexSource: Send + Sync {
    /// Address of the index document for `directory`, used in logs and as
    /// cache identity.
    ///
    /// `directory` is a crumb URL: an absolute path ending with `/`.
    fn address(&self, location: &PageLocation, directory: &str) -> String;

    /// Fetch the index document for `directory` as HTML.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the document cannot be obtained.
    fn fetch_index(&self, location: &PageLocation, directory: &str) -> Result<String, FetchError>;
}

/// Source that never fetches anything.
///
/// Every crumb keeps its slug-derived label.
pub struct OfflineSource;

impl IndexSource for OfflineSource {
    fn address(&self, _location: &PageLocation, directory: &str) -> String {
        directory.to_owned()
    }

    fn fetch_index(&self, location: &PageLocation, directory: &str) -> Result<String, FetchError> {
        Err(FetchError::Offline(self.address(location, directory)))
    }
}
