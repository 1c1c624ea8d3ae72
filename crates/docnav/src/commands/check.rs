//! `docnav check` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Build the sidebar and report warnings and a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the sidebar is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load()?;
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: defaults (no docnav.toml found)"),
        }

        let snapshot = config.snapshot()?;

        output.heading(&snapshot.site.identity.title);
        output.warnings(&snapshot.warnings);
        output.summary(
            snapshot.site.sidebar.stats(),
            snapshot.site.search.kind(),
            snapshot.warnings.len(),
        );
        Ok(())
    }
}
