//! Parallel resolution of intermediate crumb titles.

use crumbs_trail::{Crumb, PageLocation, TitleSources, intermediate_range};
use rayon::prelude::*;
use serde::Serialize;

use crate::source::IndexSource;

/// Outcome counts of one resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    /// Crumbs whose label was replaced by a fetched title.
    pub resolved: usize,
    /// Fetched documents that named no title.
    pub unchanged: usize,
    /// Fetches that failed.
    pub failed: usize,
}

impl ResolveReport {
    /// Number of fetches attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.resolved + self.unchanged + self.failed
    }

    /// Add another report's counts to this one.
    pub fn merge(&mut self, other: Self) {
        self.resolved += other.resolved;
        self.unchanged += other.unchanged;
        self.failed += other.failed;
    }
}

enum Outcome {
    Resolved,
    Unchanged,
    Failed,
}

/// Replace intermediate crumb labels with the titles of their index documents.
///
/// Only crumbs strictly between the root and the current page are touched.
/// Their documents are fetched concurrently and the call returns once every
/// fetch has settled. A crumb whose fetch fails, or whose document names no
/// title, keeps its slug-derived label. Failures are logged, never returned.
pub fn resolve_intermediates(
    crumbs: &mut [Crumb],
    location: &PageLocation,
    source: &dyn IndexSource,
) -> ResolveReport {
    let range = intermediate_range(crumbs.len());
    if range.is_empty() {
        return ResolveReport::default();
    }

    let outcomes: Vec<Outcome> = crumbs[range]
        .par_iter_mut()
        .map(|crumb| match source.fetch_index(location, &crumb.url) {
            Ok(html) => match TitleSources::from_html(&html).index_title() {
                Some(title) => {
                    crumb.label = title;
                    Outcome::Resolved
                }
                None => Outcome::Unchanged,
            },
            Err(e) => {
                tracing::debug!(url = %crumb.url, "keeping slug label: {e}");
                Outcome::Failed
            }
        })
        .collect();

    let mut report = ResolveReport::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Resolved => report.resolved += 1,
            Outcome::Unchanged => report.unchanged += 1,
            Outcome::Failed => report.failed += 1,
        }
    }
    report
}
