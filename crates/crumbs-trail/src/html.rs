//! Minimal HTML scanning helpers.
//!
//! Pages are scanned with regular expressions rather than parsed into a tree.
//! Only start tags, their attributes and the text of a few elements are
//! needed, and all of that survives malformed markup well enough.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid comment regex"));

/// Start tag with quote-aware attribute list. Group 1: name, 2: attributes,
/// 3: self-closing slash.
pub(crate) static START_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<([a-zA-Z][a-zA-Z0-9-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    )
    .expect("invalid start tag regex")
});

/// Any start or end tag. Group 1: `/` for end tags, 2: name.
pub(crate) static ANY_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(/?)([a-zA-Z][a-zA-Z0-9-]*)(?:[\s/](?:[^>"']|"[^"]*"|'[^']*')*)?>"#)
        .expect("invalid tag regex")
});

static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("invalid attribute regex")
});

static INNER_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid inner tag regex"));

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Byte ranges of `<!-- ... -->` comments.
pub(crate) fn comment_ranges(document: &str) -> Vec<Range<usize>> {
    COMMENT_PATTERN
        .find_iter(document)
        .map(|m| m.range())
        .collect()
}

/// Whether `pos` falls inside one of `ranges`.
pub(crate) fn in_ranges(ranges: &[Range<usize>], pos: usize) -> bool {
    ranges.iter().any(|r| r.contains(&pos))
}

/// Remove comments so their content is never mistaken for markup.
pub(crate) fn strip_comments(document: &str) -> std::borrow::Cow<'_, str> {
    COMMENT_PATTERN.replace_all(document, "")
}

/// Parse an attribute list into lowercased names and entity-decoded values.
///
/// Attributes without a value map to an empty string.
pub(crate) fn parse_attributes(raw: &str) -> Vec<(String, String)> {
    ATTRIBUTE_PATTERN
        .captures_iter(raw)
        .map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or(String::new(), |m| {
                    html_escape::decode_html_entities(m.as_str()).into_owned()
                });
            (name, value)
        })
        .collect()
}

/// Plain text of an HTML fragment: tags dropped, entities decoded,
/// whitespace collapsed.
pub(crate) fn text_content(fragment: &str) -> String {
    let without_tags = INNER_TAG_PATTERN.replace_all(fragment, "");
    let decoded = html_escape::decode_html_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Escape text for element content.
pub(crate) fn escape_text(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape text for a double-quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_attributes_quoting_styles() {
        let attrs = parse_attributes(r#" id="nav" class='a b' data-x=1 hidden"#);
        assert_eq!(
            attrs,
            vec![
                ("id".to_owned(), "nav".to_owned()),
                ("class".to_owned(), "a b".to_owned()),
                ("data-x".to_owned(), "1".to_owned()),
                ("hidden".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_attributes_lowercases_names_and_decodes_values() {
        let attrs = parse_attributes(r#" Data-Root-Label="R&amp;D""#);
        assert_eq!(attrs, vec![("data-root-label".to_owned(), "R&D".to_owned())]);
    }

    #[test]
    fn test_text_content() {
        assert_eq!(
            text_content("  Getting <em>Started</em>\n  &amp; more "),
            "Getting Started & more"
        );
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("a<!-- <h1>x</h1> -->b"), "ab");
    }

    #[test]
    fn test_start_tag_ignores_gt_inside_quotes() {
        let caps = START_TAG_PATTERN
            .captures(r#"<nav title="a > b" data-breadcrumb>"#)
            .unwrap();
        assert_eq!(&caps[1], "nav");
        assert!(caps[2].contains("data-breadcrumb"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_text("<a & b>"), "&lt;a &amp; b&gt;");
        assert_eq!(escape_attr(r#"/x?"y""#), "/x?&quot;y&quot;");
    }
}
