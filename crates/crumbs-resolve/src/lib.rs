//! Index document fetching and the breadcrumb pipeline.
//!
//! Intermediate crumbs get better labels from the index documents of their
//! directories. This crate fetches those documents through an [`IndexSource`]
//! and ties the pure trail logic of `crumbs_trail` into one pass per page.
//!
//! # Sources
//!
//! - [`HttpIndexSource`]: GET over HTTP(S) with a shared `ureq` agent
//! - [`FsIndexSource`]: Read from a built site directory on disk
//! - [`OfflineSource`]: Never fetches, every crumb keeps its slug label
//! - [`CachedSource`]: Decorator remembering successful fetches
//! - `MockIndexSource`: In-memory source (requires `mock` feature)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use crumbs_resolve::{BreadcrumbRenderer, OfflineSource};
//! use crumbs_trail::{BaseDetector, PageLocation, TrailDefaults};
//!
//! let renderer = BreadcrumbRenderer::new(
//!     TrailDefaults::default(),
//!     BaseDetector::default(),
//!     Arc::new(OfflineSource),
//! );
//!
//! let location = PageLocation::parse("https://user.github.io/repo/guide/intro/").unwrap();
//! let document = "<nav data-breadcrumb></nav><h1>Introduction</h1>";
//! let trail = renderer.trail(document, &location).unwrap();
//!
//! let labels: Vec<_> = trail.crumbs.iter().map(|c| c.label.as_str()).collect();
//! assert_eq!(labels, ["Home", "Guide", "Introduction"]);
//! ```

mod cached;
mod fs;
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod renderer;
mod resolver;
mod source;

pub use cached::CachedSource;
pub use fs::FsIndexSource;
pub use http::{HttpIndexSource, create_agent};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockIndexSource;
pub use renderer::{BreadcrumbRenderer, Trail};
pub use resolver::{ResolveReport, resolve_intermediates};
pub use source::{FetchError, IndexSource, OfflineSource};
