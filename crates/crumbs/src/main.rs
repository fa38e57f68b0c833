//! Crumbs CLI - Breadcrumb trails for static pages.
//!
//! Provides commands for:
//! - `render`: Render the trail into one HTML document
//! - `trail`: Print the computed trail as JSON
//! - `build`: Render trails into every page of a built site

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RenderArgs, TrailArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crumbs - Breadcrumb trails for statically hosted pages.
#[derive(Parser)]
#[command(name = "crumbs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the breadcrumb trail into an HTML document.
    Render(RenderArgs),
    /// Print the breadcrumb trail of an HTML document as JSON.
    Trail(TrailArgs),
    /// Render breadcrumb trails into every page of a built site.
    Build(BuildArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.shared.verbose,
            Self::Trail(args) => args.shared.verbose,
            Self::Build(args) => args.shared.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Trail(args) => args.execute(),
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
