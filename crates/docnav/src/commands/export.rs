//! `docnav export` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Write the snapshot to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Build the snapshot and write it as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be built or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load()?;
        let snapshot = config.snapshot()?;
        output.warnings(&snapshot.warnings);

        let json = snapshot.site.to_json(!self.compact)?;
        match self.output {
            Some(path) => {
                write_snapshot(&path, &json)?;
                output.success(&format!("Snapshot written to {}", path.display()));
            }
            None => output.emit(&json)?,
        }
        Ok(())
    }
}

/// Write snapshot JSON to a file, newline-terminated.
fn write_snapshot(path: &Path, json: &str) -> std::io::Result<()> {
    std::fs::write(path, format!("{json}\n"))?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Wrote snapshot");
    Ok(())
}
