//! `docnav tree` command implementation.

use clap::Args;
use docnav_nav::{NavNode, NavigationTree, is_external_url};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl TreeArgs {
    /// Print the resolved sidebar as an indented outline.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the sidebar is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load()?;
        let snapshot = config.snapshot()?;
        output.warnings(&snapshot.warnings);

        for line in render_tree(&snapshot.site.sidebar) {
            output.emit(&line)?;
        }
        Ok(())
    }
}

/// Render one line per node, indented two spaces per level.
fn render_tree(tree: &NavigationTree) -> Vec<String> {
    fn walk(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        for node in nodes {
            let label = node.label().unwrap_or("(untitled)");
            let line = match node {
                NavNode::Link(link) => format!("{indent}{label} -> {}", describe(link.resolved_target())),
                NavNode::Group(group) => {
                    let mut line = format!("{indent}{label}");
                    if let Some(target) = group.resolved_target() {
                        line.push_str(&format!(" -> {}", describe(target)));
                    }
                    if group.collapsed() {
                        line.push_str(" [collapsed]");
                    }
                    line
                }
                NavNode::Placeholder(_) => format!("{indent}{label} (coming soon)"),
            };
            lines.push(line);
            walk(node.children(), depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(tree.items(), 0, &mut lines);
    lines
}

fn describe(target: &str) -> String {
    if is_external_url(target) {
        format!("{target} (external)")
    } else {
        target.to_owned()
    }
}
