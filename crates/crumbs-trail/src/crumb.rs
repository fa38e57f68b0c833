//! Crumb trail construction.

use std::ops::Range;

use serde::Serialize;

use crate::slug::slug_to_label;

/// Resolved settings for one trail. Computed once per page, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailOptions {
    /// Site root, always with leading and trailing slash.
    pub base_path: String,
    /// Fetch intermediate index documents to improve their labels.
    pub resolve_intermediates: bool,
    /// Label of the root crumb.
    pub root_label: String,
}

impl TrailOptions {
    /// Create trail options.
    #[must_use]
    pub fn new(
        base_path: impl Into<String>,
        resolve_intermediates: bool,
        root_label: impl Into<String>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            resolve_intermediates,
            root_label: root_label.into(),
        }
    }
}

/// One entry of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// Link target, a directory URL ending with `/`.
    pub url: String,
    /// True for the page being viewed.
    pub is_current: bool,
    /// Path segment this crumb was derived from (empty for the root).
    pub slug: String,
}

/// Build the trail for a list of path segments.
///
/// The root crumb comes first and links to the base path. Each segment adds
/// a crumb whose URL is the cumulative path through it. Exactly one crumb is
/// current: the last segment, or the root when there are no segments.
#[must_use]
pub fn build_trail(segments: &[String], options: &TrailOptions) -> Vec<Crumb> {
    let mut crumbs = Vec::with_capacity(segments.len() + 1);
    crumbs.push(Crumb {
        label: options.root_label.clone(),
        url: options.base_path.clone(),
        is_current: segments.is_empty(),
        slug: String::new(),
    });

    let mut url = options.base_path.clone();
    for (i, segment) in segments.iter().enumerate() {
        url.push_str(segment);
        url.push('/');
        crumbs.push(Crumb {
            label: slug_to_label(segment),
            url: url.clone(),
            is_current: i + 1 == segments.len(),
            slug: segment.clone(),
        });
    }

    crumbs
}

/// Indices of the crumbs strictly between the root and the current page.
///
/// ```
/// use crumbs_trail::intermediate_range;
///
/// assert_eq!(intermediate_range(4), 1..3);
/// assert!(intermediate_range(2).is_empty());
/// ```
#[must_use]
pub fn intermediate_range(len: usize) -> Range<usize> {
    1..len.saturating_sub(1).max(1)
}
