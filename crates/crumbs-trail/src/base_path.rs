//! Base path resolution.
//!
//! Project pages hosts (`user.github.io/repo/`) serve each site under its own
//! first path segment. That segment is the logical root of the trail and must
//! not show up as a crumb.

use crate::location::PageLocation;
use crate::segments::looks_like_file;

/// Decides whether a page lives on a project pages host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseDetector {
    pages_suffixes: Vec<String>,
}

impl Default for BaseDetector {
    fn default() -> Self {
        Self::new(["github.io"])
    }
}

impl BaseDetector {
    /// Create a detector for the given hostname suffixes.
    ///
    /// Suffixes are matched case-insensitively on label boundaries, a leading
    /// dot is optional (`github.io` and `.github.io` are equivalent).
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pages_suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { pages_suffixes }
    }

    /// Whether `hostname` belongs to a project pages host.
    #[must_use]
    pub fn is_pages_host(&self, hostname: &str) -> bool {
        let hostname = hostname.to_ascii_lowercase();
        self.pages_suffixes.iter().any(|suffix| {
            hostname == *suffix
                || hostname
                    .strip_suffix(suffix.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }

    /// Auto-detect the base path for a location.
    ///
    /// On a pages host the first path segment becomes the base, everywhere
    /// else the site is rooted at `/`.
    #[must_use]
    pub fn detect(&self, location: &PageLocation) -> String {
        if !self.is_pages_host(location.hostname()) {
            return "/".to_owned();
        }

        location
            .path()
            .split('/')
            .find(|s| !s.is_empty())
            .filter(|first| !looks_like_file(first))
            .map_or_else(|| "/".to_owned(), |first| format!("/{first}/"))
    }
}

/// Pick the base path for a page: explicit value when given, else detected.
///
/// The result always starts and ends with `/`.
#[must_use]
pub fn resolve_base_path(
    explicit: Option<&str>,
    location: &PageLocation,
    detector: &BaseDetector,
) -> String {
    match explicit {
        Some(base) => normalize_base_path(base),
        None => detector.detect(location),
    }
}

/// Ensure a base path has a leading and a trailing slash.
///
/// ```
/// use crumbs_trail::normalize_base_path;
///
/// assert_eq!(normalize_base_path("repo"), "/repo/");
/// assert_eq!(normalize_base_path(""), "/");
/// ```
#[must_use]
pub fn normalize_base_path(base: &str) -> String {
    let base = base.trim();
    let mut normalized = String::with_capacity(base.len() + 2);
    if !base.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(base);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(url: &str) -> PageLocation {
        PageLocation::parse(url).unwrap()
    }

    #[test]
    fn test_detects_project_prefix_on_pages_host() {
        let detector = BaseDetector::default();
        assert_eq!(detector.detect(&location("https://user.github.io/repo/guide/")), "/repo/");
    }

    #[test]
    fn test_pages_host_without_segments() {
        let detector = BaseDetector::default();
        assert_eq!(detector.detect(&location("https://user.github.io/")), "/");
        assert_eq!(detector.detect(&location("https://user.github.io/index.html")), "/");
    }

    #[test]
    fn test_other_hosts_use_root() {
        let detector = BaseDetector::default();
        assert_eq!(detector.detect(&location("https://docs.example.com/repo/guide/")), "/");
        assert_eq!(detector.detect(&location("/repo/guide/")), "/");
    }

    #[test]
    fn test_suffix_matches_on_label_boundary() {
        let detector = BaseDetector::default();
        assert!(detector.is_pages_host("user.github.io"));
        assert!(detector.is_pages_host("User.GitHub.IO"));
        assert!(detector.is_pages_host("github.io"));
        assert!(!detector.is_pages_host("notgithub.io"));
        assert!(!detector.is_pages_host("example.com"));
    }

    #[test]
    fn test_custom_suffixes() {
        let detector = BaseDetector::new([".gitlab.io", " codeberg.page "]);
        assert!(detector.is_pages_host("team.gitlab.io"));
        assert!(detector.is_pages_host("me.codeberg.page"));
        assert!(!detector.is_pages_host("user.github.io"));
    }

    #[test]
    fn test_no_suffixes_never_detects() {
        let detector = BaseDetector::new(Vec::<String>::new());
        assert_eq!(detector.detect(&location("https://user.github.io/repo/")), "/");
    }

    #[test]
    fn test_explicit_base_wins() {
        let detector = BaseDetector::default();
        let loc = location("https://user.github.io/repo/guide/");
        assert_eq!(resolve_base_path(Some("/repo/guide"), &loc, &detector), "/repo/guide/");
        assert_eq!(resolve_base_path(Some("/"), &loc, &detector), "/");
        assert_eq!(resolve_base_path(None, &loc, &detector), "/repo/");
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("/repo"), "/repo/");
        assert_eq!(normalize_base_path("repo/"), "/repo/");
        assert_eq!(normalize_base_path(" /a/b/ "), "/a/b/");
    }
}
