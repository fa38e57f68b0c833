//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod render;
pub(crate) mod trail;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use crumbs_cache::{Cache, FileCache, NullCache};
use crumbs_config::{CliSettings, Config};
use crumbs_resolve::{CachedSource, HttpIndexSource, IndexSource, OfflineSource, create_agent};
use crumbs_trail::{BaseDetector, TrailDefaults};

use crate::VERSION;
use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use render::RenderArgs;
pub(crate) use trail::TrailArgs;

/// Flags accepted by every command.
#[derive(Args)]
pub(crate) struct SharedArgs {
    /// Path to configuration file (default: auto-discover crumbs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Label of the root crumb (overrides config).
    #[arg(long)]
    root_label: Option<String>,

    /// Site base path (overrides config and auto-detection).
    #[arg(long)]
    base_path: Option<String>,

    /// Keep slug labels for intermediate crumbs instead of fetching titles.
    #[arg(long)]
    no_resolve_intermediates: bool,

    /// Disable caching of fetched index documents.
    #[arg(long)]
    no_cache: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SharedArgs {
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root_label: self.root_label.clone(),
            base_path: self.base_path.clone(),
            resolve_intermediates: self.no_resolve_intermediates.then_some(false),
            cache_enabled: self.no_cache.then_some(false),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

pub(crate) fn trail_defaults(config: &Config) -> TrailDefaults {
    TrailDefaults {
        root_label: config.trail.root_label.clone(),
        base_path: config.trail.base_path.clone(),
        resolve_intermediates: config.trail.resolve_intermediates,
    }
}

pub(crate) fn base_detector(config: &Config) -> BaseDetector {
    BaseDetector::new(&config.hosting.pages_suffixes)
}

/// HTTP source for fetched index documents, cached on disk unless disabled.
pub(crate) fn http_source(config: &Config, offline: bool) -> Arc<dyn IndexSource> {
    if offline {
        return Arc::new(OfflineSource);
    }

    let http = HttpIndexSource::new(
        create_agent(config.fetch.timeout()),
        config.trail.index_document.clone(),
        config.fetch.user_agent.clone(),
    );
    let cache: Box<dyn Cache> = if config.fetch.cache_enabled {
        Box::new(FileCache::new(config.cache_dir(), VERSION))
    } else {
        Box::new(NullCache)
    };
    Arc::new(CachedSource::new(http, cache.as_ref()))
}

/// Read a document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut document = String::new();
        std::io::stdin().read_to_string(&mut document)?;
        return Ok(document);
    }
    std::fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbs_resolve::FetchError;
    use crumbs_trail::PageLocation;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> Config {
        let path = dir.path().join("crumbs.toml");
        std::fs::write(&path, "[fetch]\ncache_enabled = false\n").unwrap();
        Config::load(Some(&path), None).unwrap()
    }

    #[test]
    fn test_read_input_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<h1>Intro</h1>").unwrap();

        assert_eq!(read_input(&path).unwrap(), "<h1>Intro</h1>");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.html");

        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, CliError::File { path: ref p, .. } if *p == path));
    }

    #[test]
    fn test_offline_source_never_fetches() {
        let dir = TempDir::new().unwrap();
        let location = PageLocation::parse("https://docs.example.com/guide/intro/").unwrap();

        let source = http_source(&config(&dir), true);

        let err = source.fetch_index(&location, "/guide/").unwrap_err();
        assert!(matches!(err, FetchError::Offline(_)));
    }

    #[test]
    fn test_http_source_addresses_index_document() {
        let dir = TempDir::new().unwrap();
        let location = PageLocation::parse("https://docs.example.com/guide/intro/").unwrap();

        let source = http_source(&config(&dir), false);

        assert_eq!(
            source.address(&location, "/guide/"),
            "https://docs.example.com/guide/index.html"
        );
    }
}
