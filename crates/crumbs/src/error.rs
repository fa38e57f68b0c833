//! CLI error types.

use std::path::PathBuf;

use crumbs_config::ConfigError;
use crumbs_trail::LocationError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page URL: {0}")]
    Location(#[from] LocationError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Validation(String),
}
