//! Page title sources.
//!
//! Titles come from three places in a document: the first `<h1>`, a
//! `<meta name="breadcrumb" content="...">` override and `<title>`. The
//! current page and fetched index documents consult them in different orders.

use std::sync::LazyLock;

use regex::Regex;

use crate::crumb::Crumb;
use crate::html::{parse_attributes, strip_comments, text_content};

/// Label used for the current page when the document has no title at all.
pub const CURRENT_FALLBACK: &str = "Current";

static H1_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<h1(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?>(.*?)</h1\s*>"#)
        .expect("invalid h1 regex")
});

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<title(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?>(.*?)</title\s*>"#)
        .expect("invalid title regex")
});

/// Quoted attribute values may contain `>`.
static META_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta(\s(?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("invalid meta regex")
});

/// Inline SVG carries its own `<title>` elements for accessibility.
static SVG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<svg(?:[\s/](?:[^>"']|"[^"]*"|'[^']*')*)?>.*?</svg\s*>"#)
        .expect("invalid svg regex")
});

/// Title candidates found in one HTML document.
///
/// Every field is trimmed and `None` when missing or blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleSources {
    /// Text of the first `<h1>`.
    pub heading: Option<String>,
    /// `content` of `<meta name="breadcrumb">`.
    pub meta_breadcrumb: Option<String>,
    /// Text of `<title>`.
    pub document_title: Option<String>,
}

impl TitleSources {
    /// Scan an HTML document for title candidates.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        let html = strip_comments(html);

        let heading = H1_PATTERN
            .captures(&html)
            .and_then(|caps| non_blank(text_content(&caps[1])));

        let document_title = TITLE_PATTERN
            .captures(&SVG_PATTERN.replace_all(&html, ""))
            .and_then(|caps| non_blank(text_content(&caps[1])));

        let meta_breadcrumb = META_PATTERN.captures_iter(&html).find_map(|caps| {
            let attrs = parse_attributes(&caps[1]);
            let is_breadcrumb = attrs
                .iter()
                .any(|(name, value)| name == "name" && value == "breadcrumb");
            if !is_breadcrumb {
                return None;
            }
            attrs
                .into_iter()
                .find(|(name, _)| name == "content")
                .and_then(|(_, value)| non_blank(value))
        });

        Self {
            heading,
            meta_breadcrumb,
            document_title,
        }
    }

    /// Label for the page being viewed.
    ///
    /// Heading first, then the breadcrumb meta tag, then the document title,
    /// finally [`CURRENT_FALLBACK`].
    #[must_use]
    pub fn current_title(&self) -> String {
        self.heading
            .as_ref()
            .or(self.meta_breadcrumb.as_ref())
            .or(self.document_title.as_ref())
            .map_or_else(|| CURRENT_FALLBACK.to_owned(), Clone::clone)
    }

    /// Label for a fetched index document, if it names itself.
    ///
    /// The breadcrumb meta tag is an explicit override here, so it beats the
    /// heading. The document title is the last resort.
    #[must_use]
    pub fn index_title(&self) -> Option<String> {
        self.meta_breadcrumb
            .as_ref()
            .or(self.heading.as_ref())
            .or(self.document_title.as_ref())
            .cloned()
    }
}

/// Overwrite the current crumb's label with the page's own title.
///
/// A trail without path segments is left alone: its only crumb is the root
/// and keeps the configured root label.
pub fn apply_current_title(crumbs: &mut [Crumb], sources: &TitleSources) {
    if crumbs.len() < 2 {
        return;
    }
    if let Some(current) = crumbs.last_mut() {
        current.label = sources.current_title();
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}
