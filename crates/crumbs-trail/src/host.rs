//! Breadcrumb container lookup and content replacement.

use std::ops::Range;

use crate::html::{
    ANY_TAG_PATTERN, START_TAG_PATTERN, comment_ranges, in_ranges, is_void_element,
    parse_attributes,
};

/// Attribute marking the element a trail is rendered into.
pub const MARKER_ATTR: &str = "data-breadcrumb";
/// Optional explicit base path.
pub const BASE_PATH_ATTR: &str = "data-base-path";
/// Optional intermediate resolution toggle, `"false"` disables it.
pub const RESOLVE_INTERMEDIATES_ATTR: &str = "data-resolve-intermediates";
/// Optional root crumb label.
pub const ROOT_LABEL_ATTR: &str = "data-root-label";

/// The container element found in a host document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostElement {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Range<usize>,
}

impl HostElement {
    /// Find the first element carrying [`MARKER_ATTR`].
    ///
    /// Elements inside HTML comments are ignored. The content span runs up to
    /// the matching end tag; void, self-closing and unclosed elements get an
    /// empty span right after their start tag.
    #[must_use]
    pub fn find(document: &str) -> Option<Self> {
        let comments = comment_ranges(document);

        START_TAG_PATTERN
            .captures_iter(document)
            .filter(|caps| !in_ranges(&comments, caps.get(0).map_or(0, |m| m.start())))
            .find_map(|caps| {
                let attributes = parse_attributes(&caps[2]);
                if !attributes.iter().any(|(name, _)| name == MARKER_ATTR) {
                    return None;
                }

                let tag = caps[1].to_ascii_lowercase();
                let start = caps.get(0)?.end();
                let self_closing = !caps[3].is_empty();
                let end = if self_closing || is_void_element(&tag) {
                    start
                } else {
                    find_end_tag(document, &tag, start, &comments).unwrap_or(start)
                };

                Some(Self {
                    tag,
                    attributes,
                    content: start..end,
                })
            })
    }

    /// Lowercased tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of an attribute (name is matched case-insensitively).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Explicit base path, if the container declares one.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.attribute(BASE_PATH_ATTR)
    }

    /// Intermediate resolution toggle, if the container declares one.
    ///
    /// Only the exact value `"false"` disables resolution.
    #[must_use]
    pub fn resolve_intermediates(&self) -> Option<bool> {
        self.attribute(RESOLVE_INTERMEDIATES_ATTR)
            .map(|v| v != "false")
    }

    /// Root label, if the container declares one.
    #[must_use]
    pub fn root_label(&self) -> Option<&str> {
        self.attribute(ROOT_LABEL_ATTR)
    }

    /// Byte range of the element's current content.
    #[must_use]
    pub fn content_range(&self) -> Range<usize> {
        self.content.clone()
    }

    /// Return `document` with the element's content replaced by `html`.
    ///
    /// `document` must be the document this element was found in.
    #[must_use]
    pub fn replace_content(&self, document: &str, html: &str) -> String {
        let Range { start, end } = self.content;
        let mut out = String::with_capacity(document.len() - (end - start) + html.len());
        out.push_str(&document[..start]);
        out.push_str(html);
        out.push_str(&document[end..]);
        out
    }
}

/// Offset of the end tag closing an element of `tag` opened before `from`.
fn find_end_tag(
    document: &str,
    tag: &str,
    from: usize,
    comments: &[Range<usize>],
) -> Option<usize> {
    let mut depth = 0usize;

    for caps in ANY_TAG_PATTERN.captures_iter(&document[from..]) {
        let whole = caps.get(0)?;
        if in_ranges(comments, from + whole.start()) || !caps[2].eq_ignore_ascii_case(tag) {
            continue;
        }

        let is_end = !caps[1].is_empty();
        if is_end {
            if depth == 0 {
                return Some(from + whole.start());
            }
            depth -= 1;
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    None
}
