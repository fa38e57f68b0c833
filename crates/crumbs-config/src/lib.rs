//! Configuration management for crumbs.
//!
//! Parses `crumbs.toml` with serde and discovers it in the current directory
//! or any parent. Values configured here are site-wide defaults: attributes on
//! the breadcrumb container element still win over them.
//!
//! ```toml
//! [trail]
//! root_label = "Home"
//! base_path = "/repo/"            # optional, auto-detected when absent
//! resolve_intermediates = true
//! index_document = "index.html"
//!
//! [hosting]
//! pages_suffixes = ["github.io"]
//!
//! [fetch]
//! timeout_secs = 10               # optional, no timeout when absent
//! user_agent = "crumbs"
//! cache_enabled = true
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in `trail.root_label`,
//! `trail.base_path` and `fetch.user_agent`.

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Name of the file searched for in the working directory and its parents.
const CONFIG_FILENAME: &str = "crumbs.toml";

/// Project directory created next to the configuration file.
const PROJECT_DIRNAME: &str = ".crumbs";

/// Command-line flags that win over the configuration file.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override root crumb label.
    pub root_label: Option<String>,
    /// Override base path.
    pub base_path: Option<String>,
    /// Override intermediate title resolution.
    pub resolve_intermediates: Option<bool>,
    /// `--no-cache` maps to `Some(false)`.
    pub cache_enabled: Option<bool>,
}

/// Contents of `crumbs.toml` plus where it was found.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trail defaults.
    pub trail: TrailConfig,
    /// Hosting platform detection.
    pub hosting: HostingConfig,
    /// Index document fetching.
    pub fetch: FetchConfig,

    /// Project directory for crumbs data (set after loading).
    #[serde(skip)]
    pub project_dir: PathBuf,
    /// File the configuration was read from, `None` for defaults.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Trail defaults used when the container element does not override them.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Label of the root crumb.
    pub root_label: String,
    /// Explicit base path. Auto-detected from the page URL when `None`.
    pub base_path: Option<String>,
    /// Fetch intermediate index documents to improve their labels.
    pub resolve_intermediates: bool,
    /// File name of the index document inside each directory.
    pub index_document: String,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            root_label: "Home".to_owned(),
            base_path: None,
            resolve_intermediates: true,
            index_document: "index.html".to_owned(),
        }
    }
}

/// Hosting platform detection settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Hostname suffixes of project-pages hosts that nest sites under a
    /// first path segment (e.g. `user.github.io/repo/`).
    pub pages_suffixes: Vec<String>,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            pages_suffixes: vec!["github.io".to_owned()],
        }
    }
}

/// Index document fetching settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Global timeout per fetch in seconds. No timeout when `None`.
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header sent with HTTP fetches.
    pub user_agent: String,
    /// Whether fetched index documents are cached on disk.
    pub cache_enabled: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("crumbs/", env!("CARGO_PKG_VERSION")).to_owned(),
            cache_enabled: true,
        }
    }
}

impl FetchConfig {
    /// Fetch timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("config file {} does not exist", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("invalid crumbs.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// `${VAR}` expansion failed.
    #[error("cannot expand {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`trail.root_label`").
        field: String,
        /// Error message (e.g., "${`SITE_LABEL`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Read the configuration and apply command-line overrides.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `crumbs.toml` in the current directory and its parents, falling back
    /// to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Cache directory path (`.crumbs/cache/`).
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.project_dir.join("cache")
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(label) = &settings.root_label {
            self.trail.root_label.clone_from(label);
        }
        if let Some(base_path) = &settings.base_path {
            self.trail.base_path = Some(base_path.clone());
        }
        if let Some(resolve) = settings.resolve_intermediates {
            self.trail.resolve_intermediates = resolve;
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.fetch.cache_enabled = cache_enabled;
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let path = current.join(CONFIG_FILENAME);
            if path.is_file() {
                return Some(path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        Self::default_with_base(&std::env::current_dir().unwrap_or_default())
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            trail: TrailConfig::default(),
            hosting: HostingConfig::default(),
            fetch: FetchConfig::default(),
            project_dir: base.join(PROJECT_DIRNAME),
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;
        config.expand_env_vars()?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.project_dir = base.join(PROJECT_DIRNAME);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.trail.root_label, "trail.root_label")?;
        require_non_empty(&self.trail.index_document, "trail.index_document")?;
        if self.trail.index_document.contains('/') {
            return Err(ConfigError::Validation(
                "trail.index_document must be a file name, not a path".to_owned(),
            ));
        }

        if self.hosting.pages_suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "hosting.pages_suffixes cannot contain empty entries".to_owned(),
            ));
        }

        if self.fetch.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.trail.root_label = expand::expand_env(&self.trail.root_label, "trail.root_label")?;
        expand::expand_opt(&mut self.trail.base_path, "trail.base_path")?;
        self.fetch.user_agent = expand::expand_env(&self.fetch.user_agent, "fetch.user_agent")?;
        Ok(())
    }
}
