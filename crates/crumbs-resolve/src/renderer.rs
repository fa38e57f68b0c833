//! End-to-end breadcrumb pipeline for one page.

use std::sync::Arc;

use crumbs_trail::{
    BaseDetector, Crumb, HostElement, PageLocation, TitleSources, TrailDefaults, TrailOptions,
    apply_current_title, build_trail, extract_segments, render_trail,
};
use serde::Serialize;

use crate::resolver::{ResolveReport, resolve_intermediates};
use crate::source::IndexSource;

/// Breadcrumb trail computed for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    /// Options in effect for the page.
    pub options: TrailOptions,
    /// Root first, current page last.
    pub crumbs: Vec<Crumb>,
    /// Intermediate resolution counts, all zero when disabled.
    pub report: ResolveReport,
}

/// Renders breadcrumb trails into host documents.
///
/// Holds the site-wide settings and the index source; each call processes one
/// page and shares nothing mutable with other calls, so a renderer can be used
/// from several threads at once.
pub struct BreadcrumbRenderer {
    defaults: TrailDefaults,
    detector: BaseDetector,
    source: Arc<dyn IndexSource>,
}

impl BreadcrumbRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new(defaults: TrailDefaults, detector: BaseDetector, source: Arc<dyn IndexSource>) -> Self {
        Self {
            defaults,
            detector,
            source,
        }
    }

    /// Site-wide defaults.
    #[must_use]
    pub fn defaults(&self) -> &TrailDefaults {
        &self.defaults
    }

    /// Compute the trail for `document` served at `location`.
    ///
    /// Returns `None` when the document has no breadcrumb container. Fetch
    /// failures never surface here: affected crumbs keep their slug labels.
    #[must_use]
    pub fn trail(&self, document: &str, location: &PageLocation) -> Option<Trail> {
        let host = HostElement::find(document)?;
        Some(self.trail_for(&host, document, location))
    }

    /// Replace the breadcrumb container's content with the rendered trail.
    ///
    /// Returns `None` when the document has no breadcrumb container.
    #[must_use]
    pub fn render_document(&self, document: &str, location: &PageLocation) -> Option<String> {
        self.render(document, location).map(|(html, _)| html)
    }

    /// Like [`Self::render_document`], also returning the trail that was rendered.
    #[must_use]
    pub fn render(&self, document: &str, location: &PageLocation) -> Option<(String, Trail)> {
        let host = HostElement::find(document)?;
        let trail = self.trail_for(&host, document, location);
        let html = host.replace_content(document, &render_trail(&trail.crumbs));
        Some((html, trail))
    }

    fn trail_for(&self, host: &HostElement, document: &str, location: &PageLocation) -> Trail {
        let options = TrailOptions::resolve(host, &self.defaults, location, &self.detector);
        let segments = extract_segments(location.path(), &options.base_path);

        let mut crumbs = build_trail(&segments, &options);
        apply_current_title(&mut crumbs, &TitleSources::from_html(document));

        let report = if options.resolve_intermediates {
            resolve_intermediates(&mut crumbs, location, self.source.as_ref())
        } else {
            ResolveReport::default()
        };

        tracing::debug!(
            path = location.path(),
            base = %options.base_path,
            crumbs = crumbs.len(),
            failed = report.failed,
            "trail computed"
        );

        Trail {
            options,
            crumbs,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockIndexSource;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<html><head><title>Intro | Docs</title></head>
<body>
<nav data-breadcrumb><p>loading</p></nav>
<h1>Introduction</h1>
</body></html>"#;

    fn renderer(source: MockIndexSource) -> BreadcrumbRenderer {
        BreadcrumbRenderer::new(
            TrailDefaults::default(),
            BaseDetector::default(),
            Arc::new(source),
        )
    }

    fn labels(trail: &Trail) -> Vec<&str> {
        trail.crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_no_container_is_noop() {
        let location = PageLocation::parse("https://example.com/a/b/").unwrap();
        let renderer = renderer(MockIndexSource::new());

        assert_eq!(renderer.trail("<p>nothing</p>", &location), None);
        assert_eq!(renderer.render_document("<p>nothing</p>", &location), None);
    }

    #[test]
    fn test_pages_host_trail() {
        let location = PageLocation::parse("https://user.github.io/repo/guide/intro/").unwrap();
        let renderer = renderer(MockIndexSource::new());

        let trail = renderer.trail("<div data-breadcrumb></div>", &location).unwrap();

        assert_eq!(trail.options.base_path, "/repo/");
        let urls: Vec<&str> = trail.crumbs.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, ["/repo/", "/repo/guide/", "/repo/guide/intro/"]);
        assert_eq!(labels(&trail), ["Home", "Guide", "Current"]);
        assert!(trail.crumbs[2].is_current);
        assert_eq!(trail.report.failed, 1);
    }

    #[test]
    fn test_current_title_and_intermediates() {
        let location = PageLocation::parse("https://docs.example.com/guide/basics/intro/").unwrap();
        let source = MockIndexSource::new()
            .with_document("/guide/", r#"<meta name="breadcrumb" content="User Guide">"#)
            .with_status("/guide/basics/", 503);

        let trail = renderer(source).trail(PAGE, &location).unwrap();

        assert_eq!(labels(&trail), ["Home", "User Guide", "Basics", "Introduction"]);
        assert_eq!(
            trail.report,
            ResolveReport {
                resolved: 1,
                unchanged: 0,
                failed: 1
            }
        );
    }

    #[test]
    fn test_attributes_override_defaults() {
        let location = PageLocation::parse("https://user.github.io/repo/guide/intro/").unwrap();
        let source = MockIndexSource::new().with_document("/repo/guide/", "<h1>Fetched</h1>");
        let renderer = renderer(source);

        let document = r#"<ol data-breadcrumb data-base-path="/" data-root-label="Start" data-resolve-intermediates="false"></ol>"#;
        let trail = renderer.trail(document, &location).unwrap();

        assert_eq!(trail.options.base_path, "/");
        assert!(!trail.options.resolve_intermediates);
        assert_eq!(labels(&trail), ["Start", "Repo", "Guide", "Current"]);
        assert_eq!(trail.report, ResolveReport::default());
    }

    #[test]
    fn test_render_document_replaces_container_content() {
        let location = PageLocation::parse("https://docs.example.com/guide/intro/").unwrap();
        let rendered = renderer(MockIndexSource::new())
            .render_document(PAGE, &location)
            .unwrap();

        assert!(!rendered.contains("loading"));
        assert!(rendered.contains(
            "<nav data-breadcrumb><ol class=\"breadcrumb\">\n\
             <li class=\"breadcrumb-item\"><a href=\"/\">Home</a></li>\n\
             <li class=\"breadcrumb-item\"><a href=\"/guide/\">Guide</a></li>\n\
             <li class=\"breadcrumb-item\"><span aria-current=\"page\">Introduction</span></li>\n\
             </ol></nav>"
        ));
        assert!(rendered.ends_with("<h1>Introduction</h1>\n</body></html>"));
    }

    #[test]
    fn test_site_root_keeps_root_label() {
        let location = PageLocation::parse("https://docs.example.com/index.html").unwrap();
        let trail = renderer(MockIndexSource::new()).trail(PAGE, &location).unwrap();

        assert_eq!(trail.crumbs.len(), 1);
        assert_eq!(trail.crumbs[0].label, "Home");
        assert!(trail.crumbs[0].is_current);
    }
}
