//! Trail option resolution from container attributes and site defaults.

use crate::base_path::{BaseDetector, resolve_base_path};
use crate::crumb::TrailOptions;
use crate::host::HostElement;
use crate::location::PageLocation;

/// Site-wide defaults used when the container element is silent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailDefaults {
    /// Label of the root crumb.
    pub root_label: String,
    /// Explicit base path, auto-detected when `None`.
    pub base_path: Option<String>,
    /// Whether intermediate titles are fetched.
    pub resolve_intermediates: bool,
}

impl Default for TrailDefaults {
    fn default() -> Self {
        Self {
            root_label: "Home".to_owned(),
            base_path: None,
            resolve_intermediates: true,
        }
    }
}

impl TrailOptions {
    /// Resolve the options for one page.
    ///
    /// Container attributes take precedence over `defaults`. The base path is
    /// auto-detected only when neither names one.
    #[must_use]
    pub fn resolve(
        host: &HostElement,
        defaults: &TrailDefaults,
        location: &PageLocation,
        detector: &BaseDetector,
    ) -> Self {
        let explicit_base = host.base_path().or(defaults.base_path.as_deref());
        let base_path = resolve_base_path(explicit_base, location, detector);

        let resolve_intermediates = host
            .resolve_intermediates()
            .unwrap_or(defaults.resolve_intermediates);

        let root_label = host
            .root_label()
            .unwrap_or(&defaults.root_label)
            .to_owned();

        Self {
            base_path,
            resolve_intermediates,
            root_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(host_tag: &str, defaults: &TrailDefaults) -> TrailOptions {
        let document = format!("<body>{host_tag}</nav></body>");
        let host = HostElement::find(&document).unwrap();
        let location = PageLocation::parse("https://user.github.io/repo/guide/").unwrap();
        TrailOptions::resolve(&host, defaults, &location, &BaseDetector::default())
    }

    #[test]
    fn test_bare_container_uses_defaults_and_detection() {
        let options = resolve("<nav data-breadcrumb>", &TrailDefaults::default());
        assert_eq!(options, TrailOptions::new("/repo/", true, "Home"));
    }

    #[test]
    fn test_attributes_override_defaults() {
        let defaults = TrailDefaults {
            root_label: "Docs".to_owned(),
            base_path: Some("/site/".to_owned()),
            resolve_intermediates: true,
        };
        let options = resolve(
            r#"<nav data-breadcrumb data-base-path="/" data-resolve-intermediates="false" data-root-label="Start">"#,
            &defaults,
        );
        assert_eq!(options, TrailOptions::new("/", false, "Start"));
    }

    #[test]
    fn test_default_base_path_normalized() {
        let defaults = TrailDefaults {
            base_path: Some("site".to_owned()),
            ..TrailDefaults::default()
        };
        let options = resolve("<nav data-breadcrumb>", &defaults);
        assert_eq!(options.base_path, "/site/");
    }

    #[test]
    fn test_default_can_disable_intermediates() {
        let defaults = TrailDefaults {
            resolve_intermediates: false,
            ..TrailDefaults::default()
        };
        assert!(!resolve("<nav data-breadcrumb>", &defaults).resolve_intermediates);
        assert!(
            resolve(r#"<nav data-breadcrumb data-resolve-intermediates="true">"#, &defaults)
                .resolve_intermediates
        );
    }
}
