//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod lint;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use lint::LintArgs;
pub(crate) use tree::TreeArgs;

use crate::error::CliError;

/// Configuration arguments shared by commands that build the sidebar.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat navigation warnings as errors (overrides config).
    #[arg(long)]
    strict: bool,

    /// Search provider identifier (overrides config).
    #[arg(long, env = "DOCNAV_SEARCH_PROVIDER")]
    search_provider: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            search_provider: self.search_provider.clone(),
            strict: self.strict.then_some(true),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
