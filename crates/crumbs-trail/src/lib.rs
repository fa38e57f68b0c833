//! Breadcrumb trail derivation and rendering.
//!
//! Everything in this crate is pure: the page URL and the page document are
//! explicit inputs, so trails can be computed without a browser or network.
//!
//! - [`PageLocation`]: Parsed page URL (origin, hostname, path)
//! - [`BaseDetector`] / [`resolve_base_path`]: Site root detection
//! - [`extract_segments`]: Path segments below the base path
//! - [`build_trail`]: Root crumb plus one crumb per segment
//! - [`TitleSources`]: Title candidates found in an HTML document
//! - [`HostElement`]: The container element a trail is rendered into
//! - [`render_trail`]: Ordered-list markup for a trail
//!
//! # Example
//!
//! ```
//! use crumbs_trail::{
//!     BaseDetector, PageLocation, TrailOptions, build_trail, extract_segments,
//!     resolve_base_path,
//! };
//!
//! let location = PageLocation::parse("https://user.github.io/repo/guide/intro/").unwrap();
//! let base = resolve_base_path(None, &location, &BaseDetector::default());
//! assert_eq!(base, "/repo/");
//!
//! let segments = extract_segments(location.path(), &base);
//! let options = TrailOptions::new(base, true, "Home");
//! let crumbs = build_trail(&segments, &options);
//!
//! assert_eq!(crumbs.len(), 3);
//! assert_eq!(crumbs[1].label, "Guide");
//! assert_eq!(crumbs[2].url, "/repo/guide/intro/");
//! assert!(crumbs[2].is_current);
//! ```

mod base_path;
mod crumb;
mod host;
mod html;
mod location;
mod options;
mod render;
mod segments;
mod slug;
mod title;

pub use base_path::{BaseDetector, normalize_base_path, resolve_base_path};
pub use crumb::{Crumb, TrailOptions, build_trail, intermediate_range};
pub use host::{
    BASE_PATH_ATTR, HostElement, MARKER_ATTR, RESOLVE_INTERMEDIATES_ATTR, ROOT_LABEL_ATTR,
};
pub use location::{LocationError, PageLocation};
pub use options::TrailDefaults;
pub use render::render_trail;
pub use segments::extract_segments;
pub use slug::slug_to_label;
pub use title::{CURRENT_FALLBACK, TitleSources, apply_current_title};
