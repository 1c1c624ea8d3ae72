//! docnav CLI - documentation site navigation.
//!
//! Provides commands for:
//! - `check`: Build the sidebar and report problems
//! - `export`: Write the resolved site snapshot as JSON
//! - `tree`: Print the resolved sidebar outline
//! - `lint`: Check an exported snapshot for duplicate targets

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, LintArgs, TreeArgs};
use output::Output;

/// docnav - Documentation site navigation.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable verbose output (log configuration loading and build details).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sidebar and report warnings.
    Check(CheckArgs),
    /// Write the resolved site snapshot as JSON.
    Export(ExportArgs),
    /// Print the resolved sidebar outline.
    Tree(TreeArgs),
    /// Check an exported snapshot for duplicate navigation targets.
    Lint(LintArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Lint(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
