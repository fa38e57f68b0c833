//! HTTP index source.

use std::time::Duration;

use crumbs_trail::PageLocation;
use ureq::Agent;

use crate::source::{FetchError, IndexSource};

/// Create an HTTP agent for index fetches.
///
/// `None` means no global timeout: a hanging server delays the trail for as
/// long as the connection stays open. HTTP error statuses are returned as
/// responses so they can be reported with their code.
#[must_use]
pub fn create_agent(timeout: Option<Duration>) -> Agent {
    Agent::config_builder()
        .timeout_global(timeout)
        .http_status_as_error(false)
        .build()
        .into()
}

/// Fetches `{origin}{directory}{index_document}` over HTTP(S).
pub struct HttpIndexSource {
    agent: Agent,
    index_document: String,
    user_agent: String,
}

impl HttpIndexSource {
    /// Create a source sharing `agent` for connection pooling.
    #[must_use]
    pub fn new(agent: Agent, index_document: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            agent,
            index_document: index_document.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl IndexSource for HttpIndexSource {
    fn address(&self, location: &PageLocation, directory: &str) -> String {
        location.join(&format!("{directory}{}", self.index_document))
    }

    fn fetch_index(&self, location: &PageLocation, directory: &str) -> Result<String, FetchError> {
        let url = self.address(location, directory);
        if location.origin().is_empty() {
            return Err(FetchError::NoOrigin(url));
        }

        let response = self
            .agent
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "text/html")
            .call()
            .map_err(|e| FetchError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status { url, status });
        }

        response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Body {
                address: url,
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpIndexSource {
        HttpIndexSource::new(create_agent(Some(Duration::from_secs(1))), "index.html", "crumbs-test")
    }

    #[test]
    fn test_address() {
        let location = PageLocation::parse("https://user.github.io/repo/guide/intro/").unwrap();
        assert_eq!(
            source().address(&location, "/repo/guide/"),
            "https://user.github.io/repo/guide/index.html"
        );
    }

    #[test]
    fn test_bare_path_location_has_no_origin() {
        let location = PageLocation::parse("/repo/guide/intro/").unwrap();
        let err = source().fetch_index(&location, "/repo/guide/").unwrap_err();
        assert!(matches!(err, FetchError::NoOrigin(_)));
    }

    #[test]
    fn test_connection_failure_is_http_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let location = PageLocation::parse("http://127.0.0.1:9/a/b/").unwrap();
        let err = source().fetch_index(&location, "/a/").unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
    }
}
