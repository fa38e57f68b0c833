//! Path segment extraction.

/// Split a page path into the segments below `base`.
///
/// A trailing file name (`page.html`) is dropped first, so the last segment
/// always names the page's directory. When the path does not start with the
/// base path, leading slashes are stripped instead and the whole path is used.
///
/// # Examples
///
/// ```
/// use crumbs_trail::extract_segments;
///
/// assert_eq!(extract_segments("/docs/guide/page.html", "/"), vec!["docs", "guide"]);
/// assert_eq!(extract_segments("/repo/guide/", "/repo/"), vec!["guide"]);
/// assert!(extract_segments("/repo/", "/repo/").is_empty());
/// ```
#[must_use]
pub fn extract_segments(path: &str, base: &str) -> Vec<String> {
    let dir = strip_filename(path);

    let relative = if let Some(rest) = dir.strip_prefix(base) {
        rest
    } else if dir == base.trim_end_matches('/') {
        // `/repo` for base `/repo/`
        ""
    } else {
        dir.trim_start_matches('/')
    };

    relative
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Directory part of `path` when its last component looks like a file.
fn strip_filename(path: &str) -> &str {
    let last_start = path.rfind('/').map_or(0, |i| i + 1);
    if looks_like_file(&path[last_start..]) {
        &path[..last_start]
    } else {
        path
    }
}

/// Whether a path component has a dot-extension, like `intro.html`.
pub(crate) fn looks_like_file(component: &str) -> bool {
    component
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| {
            !stem.is_empty() && !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_path_has_no_segments() {
        assert!(extract_segments("/", "/").is_empty());
        assert!(extract_segments("/index.html", "/").is_empty());
    }

    #[test]
    fn test_strips_filename() {
        assert_eq!(extract_segments("/docs/guide/page.html", "/"), vec!["docs", "guide"]);
    }

    #[test]
    fn test_directory_without_trailing_slash() {
        assert_eq!(extract_segments("/docs/guide", "/"), vec!["docs", "guide"]);
    }

    #[test]
    fn test_removes_base_prefix() {
        assert_eq!(
            extract_segments("/repo/guide/intro/", "/repo/"),
            vec!["guide", "intro"]
        );
        assert!(extract_segments("/repo/index.html", "/repo/").is_empty());
    }

    #[test]
    fn test_path_equal_to_base_without_slash() {
        assert!(extract_segments("/repo", "/repo/").is_empty());
    }

    #[test]
    fn test_misdetected_base_falls_back_to_full_path() {
        assert_eq!(
            extract_segments("/other/guide/", "/repo/"),
            vec!["other", "guide"]
        );
    }

    #[test]
    fn test_empty_components_discarded() {
        assert_eq!(extract_segments("//docs///guide//", "/"), vec!["docs", "guide"]);
    }

    #[test]
    fn test_looks_like_file() {
        assert!(looks_like_file("page.html"));
        assert!(looks_like_file("archive.tar.gz"));
        assert!(!looks_like_file("v1.2-notes"));
        assert!(!looks_like_file(".hidden"));
        assert!(!looks_like_file("trailing."));
        assert!(!looks_like_file("guide"));
        assert!(!looks_like_file(""));
    }
}
