//! `crumbs render` command implementation.

use std::path::PathBuf;

use clap::Args;
use crumbs_resolve::BreadcrumbRenderer;
use crumbs_trail::PageLocation;

use super::{SharedArgs, base_detector, http_source, read_input, trail_defaults};
use crate::error::CliError;
use crate::output::{Output, write_stdout};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// HTML document to render into (`-` reads stdin).
    input: PathBuf,

    /// URL the document is served at.
    #[arg(short, long)]
    url: String,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not fetch intermediate index documents.
    #[arg(long)]
    offline: bool,

    #[command(flatten)]
    pub(crate) shared: SharedArgs,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.shared.load_config()?;
        let location = PageLocation::parse(&self.url)?;
        let document = read_input(&self.input)?;

        let renderer = BreadcrumbRenderer::new(
            trail_defaults(&config),
            base_detector(&config),
            http_source(&config, self.offline),
        );

        let rendered = renderer.render_document(&document, &location);
        if rendered.is_none() {
            output.warning("No element with data-breadcrumb found, document left unchanged");
        }
        let rendered = rendered.unwrap_or(document);

        match self.output {
            Some(path) => {
                std::fs::write(&path, rendered)
                    .map_err(|source| CliError::File { path: path.clone(), source })?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => write_stdout(&rendered)?,
        }
        Ok(())
    }
}
