//! `crumbs build` command implementation.
//!
//! Rewrites every HTML page of a built site in place. Intermediate titles are
//! read from the site directory itself, so no network access is needed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use crumbs_cache::{Cache, MemoryCache, NullCache};
use crumbs_resolve::{BreadcrumbRenderer, CachedSource, FsIndexSource, ResolveReport};
use crumbs_trail::{PageLocation, normalize_base_path};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rayon::prelude::*;

use super::{SharedArgs, base_detector, trail_defaults};
use crate::error::CliError;
use crate::output::Output;

/// Characters escaped in a path segment of a page URL.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Directory of the built static site.
    site_dir: PathBuf,

    /// URL the site root is served at (e.g. `https://user.github.io/repo/`).
    #[arg(long)]
    site_url: String,

    #[command(flatten)]
    pub(crate) shared: SharedArgs,
}

/// Result of a site build.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BuildSummary {
    /// HTML files found.
    pub(crate) pages: usize,
    /// Files whose content changed.
    pub(crate) rewritten: usize,
    /// Files without a breadcrumb container.
    pub(crate) skipped: usize,
    /// Intermediate resolution totals over all pages.
    pub(crate) report: ResolveReport,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.shared.load_config()?;
        let site = PageLocation::parse(&self.site_url)?;
        let mount_path = normalize_base_path(site.path());

        if !self.site_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "Site directory not found: {}",
                self.site_dir.display()
            )));
        }

        output.info(&format!("Site: {}", self.site_dir.display()));
        output.info(&format!("URL: {}", site.join(&mount_path)));

        let cache: Box<dyn Cache> = if config.fetch.cache_enabled {
            Box::new(MemoryCache::new())
        } else {
            Box::new(NullCache)
        };
        let source = CachedSource::new(
            FsIndexSource::new(
                self.site_dir.clone(),
                &mount_path,
                config.trail.index_document.clone(),
            ),
            cache.as_ref(),
        );

        let mut defaults = trail_defaults(&config);
        if defaults.base_path.is_none() {
            defaults.base_path = Some(mount_path.clone());
        }
        let renderer = BreadcrumbRenderer::new(defaults, base_detector(&config), Arc::new(source));

        let pages = collect_pages(&self.site_dir);
        let summary = build_site(&renderer, &site, &self.site_dir, &pages)?;

        output.detail(&format!(
            "Intermediate titles: {} resolved, {} untitled, {} unavailable",
            summary.report.resolved, summary.report.unchanged, summary.report.failed
        ));
        if summary.skipped > 0 {
            output.warning(&format!(
                "{} page(s) have no data-breadcrumb element",
                summary.skipped
            ));
        }
        output.success(&format!(
            "Rewrote {} of {} page(s)",
            summary.rewritten, summary.pages
        ));
        Ok(())
    }
}

/// Render trails into `pages` and write the changed ones back.
///
/// Every page is rendered before any file is written, so index documents are
/// never read while another page is being rewritten.
pub(crate) fn build_site(
    renderer: &BreadcrumbRenderer,
    site: &PageLocation,
    site_dir: &Path,
    pages: &[PathBuf],
) -> Result<BuildSummary, CliError> {
    let mount_path = normalize_base_path(site.path());

    let rendered: Vec<(&PathBuf, Option<(String, ResolveReport)>, bool)> = pages
        .par_iter()
        .map(|path| {
            let document = fs::read_to_string(path).map_err(|source| CliError::File {
                path: path.clone(),
                source,
            })?;
            let location = PageLocation::from_parts(
                site.origin(),
                site.hostname(),
                &page_url(&mount_path, site_dir, path),
            );
            let result = renderer
                .render(&document, &location)
                .map(|(html, trail)| (html, trail.report));
            let changed = result.as_ref().is_some_and(|(html, _)| *html != document);
            Ok::<_, CliError>((path, result, changed))
        })
        .collect::<Result<_, CliError>>()?;

    let mut summary = BuildSummary {
        pages: pages.len(),
        ..BuildSummary::default()
    };
    for (path, result, changed) in rendered {
        let Some((html, report)) = result else {
            tracing::debug!(path = %path.display(), "no breadcrumb container");
            summary.skipped += 1;
            continue;
        };
        summary.report.merge(report);
        if changed {
            fs::write(path, html).map_err(|source| CliError::File {
                path: path.clone(),
                source,
            })?;
            summary.rewritten += 1;
        }
    }

    tracing::info!(
        pages = summary.pages,
        rewritten = summary.rewritten,
        skipped = summary.skipped,
        "site build complete"
    );
    Ok(summary)
}

/// URL path of a page file below `site_dir`.
fn page_url(mount_path: &str, site_dir: &Path, page: &Path) -> String {
    let relative = page.strip_prefix(site_dir).unwrap_or(page);
    let mut url = mount_path.to_owned();
    let mut first = true;
    for component in relative.components() {
        if !first {
            url.push('/');
        }
        first = false;
        let name = component.as_os_str().to_string_lossy();
        url.extend(utf8_percent_encode(&name, SEGMENT));
    }
    url
}

/// All `.html` files below `dir`, sorted. Hidden entries are skipped.
pub(crate) fn collect_pages(dir: &Path) -> Vec<PathBuf> {
    let mut pages = Vec::new();
    collect_into(dir, &mut pages);
    pages.sort();
    pages
}

fn collect_into(dir: &Path, pages: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "unreadable directory skipped");
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            collect_into(&path, pages);
        } else if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        {
            pages.push(path);
        }
    }
}
