//! Webdemo CLI - examples catalog tooling.
//!
//! Provides commands for:
//! - `check`: Load the catalog and report load issues
//! - `tree`: Print the folder and example hierarchy
//! - `show`: Print one example's resolved files

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ShowArgs, TreeArgs};
use output::Output;

/// Webdemo - examples catalog.
#[derive(Parser)]
#[command(name = "webdemo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog and report load issues.
    Check(CheckArgs),
    /// Print the folder and example hierarchy.
    Tree(TreeArgs),
    /// Print one example.
    Show(ShowArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.catalog.verbose,
            Self::Tree(args) => args.catalog.verbose,
            Self::Show(args) => args.catalog.verbose,
        }
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose(), rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Show(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
