//! `docnav lint` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docnav_config::SiteSnapshot;
use docnav_nav::{NavError, validate_unique_paths};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the lint command.
#[derive(Args)]
pub(crate) struct LintArgs {
    /// Snapshot JSON produced by `docnav export`.
    snapshot: PathBuf,
}

impl LintArgs {
    /// Check an exported snapshot for duplicate navigation targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or has duplicates.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let targets = lint_snapshot(&self.snapshot)?;

        output.success(&format!(
            "{}: {targets} navigation targets, no duplicates",
            self.snapshot.display()
        ));
        Ok(())
    }
}

/// Read a snapshot file and return its number of navigable entries.
fn lint_snapshot(path: &Path) -> Result<usize, CliError> {
    let content = std::fs::read_to_string(path)?;
    let snapshot = SiteSnapshot::from_json(&content)?;

    let duplicates = validate_unique_paths(&snapshot.sidebar);
    if !duplicates.is_empty() {
        return Err(NavError::DuplicateTarget {
            targets: duplicates.into_iter().collect(),
        }
        .into());
    }

    Ok(snapshot.sidebar.links().len())
}
