//! Page URL parsing.

/// Error returned when a page URL cannot be used as a trail location.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// Input was empty.
    #[error("page URL is empty")]
    Empty,
    /// Neither an absolute URL nor an absolute path.
    #[error("page URL must be absolute (http(s)://host/path or /path): {0}")]
    Relative(String),
    /// Scheme other than http or https.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// URL without a host.
    #[error("page URL has no host: {0}")]
    MissingHost(String),
}

/// The current page's URL, split into the parts a trail needs.
///
/// A bare absolute path (`/guide/intro/`) is accepted too. It has an empty
/// origin and hostname, so hosting auto-detection never matches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    origin: String,
    hostname: String,
    path: String,
}

impl PageLocation {
    /// Parse a page URL.
    ///
    /// Query string and fragment are dropped. The path always starts with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] for empty, relative, non-HTTP or hostless URLs.
    pub fn parse(url: &str) -> Result<Self, LocationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(LocationError::Empty);
        }

        if url.starts_with('/') && !url.starts_with("//") {
            return Ok(Self {
                origin: String::new(),
                hostname: String::new(),
                path: clean_path(url),
            });
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(LocationError::Relative(url.to_owned()));
        };
        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(LocationError::UnsupportedScheme(scheme));
        }

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, path) = rest.split_at(authority_end);
        // Drop userinfo, it never belongs in an origin
        let authority = authority.rsplit_once('@').map_or(authority, |(_, a)| a);
        let hostname = host_without_port(authority).to_ascii_lowercase();
        if hostname.is_empty() {
            return Err(LocationError::MissingHost(url.to_owned()));
        }

        Ok(Self {
            origin: format!("{scheme}://{}", authority.to_ascii_lowercase()),
            hostname,
            path: clean_path(path),
        })
    }

    /// Build a location from already separated parts.
    #[must_use]
    pub fn from_parts(origin: &str, hostname: &str, path: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_owned(),
            hostname: hostname.to_ascii_lowercase(),
            path: clean_path(path),
        }
    }

    /// `scheme://host[:port]`, empty for bare paths.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Lowercased hostname without port, empty for bare paths.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Absolute URL path without query or fragment.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL for a path on the same origin.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }
}

fn host_without_port(authority: &str) -> &str {
    if let Some(rest) = authority.strip_prefix('[') {
        // IPv6 literal keeps its brackets
        return rest
            .find(']')
            .map_or(authority, |end| &authority[..end + 2]);
    }
    authority.split(':').next().unwrap_or_default()
}

fn clean_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let loc = PageLocation::parse("https://User.GitHub.io/repo/guide/?tab=1#top").unwrap();
        assert_eq!(loc.origin(), "https://user.github.io");
        assert_eq!(loc.hostname(), "user.github.io");
        assert_eq!(loc.path(), "/repo/guide/");
    }

    #[test]
    fn test_parse_port_and_userinfo() {
        let loc = PageLocation::parse("http://me:pw@localhost:8080/docs/page.html").unwrap();
        assert_eq!(loc.origin(), "http://localhost:8080");
        assert_eq!(loc.hostname(), "localhost");
        assert_eq!(loc.path(), "/docs/page.html");
    }

    #[test]
    fn test_parse_host_only() {
        let loc = PageLocation::parse("https://example.com").unwrap();
        assert_eq!(loc.path(), "/");

        let loc = PageLocation::parse("https://example.com?x=1").unwrap();
        assert_eq!(loc.path(), "/");
    }

    #[test]
    fn test_parse_ipv6_host() {
        let loc = PageLocation::parse("http://[::1]:3000/a/").unwrap();
        assert_eq!(loc.hostname(), "[::1]");
        assert_eq!(loc.origin(), "http://[::1]:3000");
    }

    #[test]
    fn test_parse_bare_path() {
        let loc = PageLocation::parse("/guide/intro/#x").unwrap();
        assert_eq!(loc.origin(), "");
        assert_eq!(loc.hostname(), "");
        assert_eq!(loc.path(), "/guide/intro/");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(PageLocation::parse("  "), Err(LocationError::Empty));
        assert!(matches!(
            PageLocation::parse("guide/intro"),
            Err(LocationError::Relative(_))
        ));
        assert_eq!(
            PageLocation::parse("ftp://example.com/"),
            Err(LocationError::UnsupportedScheme("ftp".to_owned()))
        );
        assert!(matches!(
            PageLocation::parse("https:///path"),
            Err(LocationError::MissingHost(_))
        ));
    }

    #[test]
    fn test_join() {
        let loc = PageLocation::parse("https://example.com/a/b/").unwrap();
        assert_eq!(loc.join("/a/index.html"), "https://example.com/a/index.html");
    }
}
