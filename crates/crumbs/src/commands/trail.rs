//! `crumbs trail` command implementation.

use std::path::PathBuf;

use clap::Args;
use crumbs_resolve::BreadcrumbRenderer;
use crumbs_trail::PageLocation;

use super::{SharedArgs, base_detector, http_source, read_input, trail_defaults};
use crate::error::CliError;
use crate::output::write_stdout;

/// Arguments for the trail command.
#[derive(Args)]
pub(crate) struct TrailArgs {
    /// HTML document to inspect (`-` reads stdin).
    input: PathBuf,

    /// URL the document is served at.
    #[arg(short, long)]
    url: String,

    /// Do not fetch intermediate index documents.
    #[arg(long)]
    offline: bool,

    #[command(flatten)]
    pub(crate) shared: SharedArgs,
}

impl TrailArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.shared.load_config()?;
        let location = PageLocation::parse(&self.url)?;
        let document = read_input(&self.input)?;

        let renderer = BreadcrumbRenderer::new(
            trail_defaults(&config),
            base_detector(&config),
            http_source(&config, self.offline),
        );

        let trail = renderer.trail(&document, &location).ok_or_else(|| {
            CliError::Validation(format!(
                "{} has no element with data-breadcrumb",
                self.input.display()
            ))
        })?;

        write_stdout(&serde_json::to_string_pretty(&trail)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: TrailArgs,
    }

    fn args(dir: &TempDir, document: &str) -> TrailArgs {
        let config = dir.path().join("crumbs.toml");
        std::fs::write(&config, "[fetch]\ncache_enabled = false\n").unwrap();
        let input = dir.path().join("page.html");
        std::fs::write(&input, document).unwrap();

        TestCli::try_parse_from([
            OsStr::new("crumbs"),
            input.as_os_str(),
            OsStr::new("--url"),
            OsStr::new("https://user.github.io/repo/guide/intro/"),
            OsStr::new("--offline"),
            OsStr::new("--config"),
            config.as_os_str(),
        ])
        .unwrap()
        .args
    }

    #[test]
    fn test_trail_without_container_fails() {
        let dir = TempDir::new().unwrap();

        let err = args(&dir, "<h1>Intro</h1>").execute().unwrap_err();

        assert!(matches!(err, CliError::Validation(ref message) if message.contains("data-breadcrumb")));
    }

    #[test]
    fn test_trail_with_container_succeeds_offline() {
        let dir = TempDir::new().unwrap();

        let result = args(&dir, "<nav data-breadcrumb></nav><h1>Intro</h1>").execute();

        assert!(result.is_ok());
    }
}
