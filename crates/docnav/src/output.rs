//! Terminal output: diagnostics on stderr, documents on stdout.

use console::{Style, Term};
use docnav_config::SearchProvider;
use docnav_nav::{BuildWarning, TreeStats};

/// Terminal output formatter.
pub(crate) struct Output {
    diagnostics: Term,
    document: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            diagnostics: Term::stderr(),
            document: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.diagnostics.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.green, msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    /// Print a heading (cyan bold).
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&self.cyan_bold, msg);
    }

    /// Print build warnings (yellow), one per line.
    pub(crate) fn warnings(&self, warnings: &[BuildWarning]) {
        for warning in warnings {
            self.styled(&self.yellow, &format!("warning: {warning}"));
        }
    }

    /// Print a one-line summary of a built sidebar.
    pub(crate) fn summary(&self, stats: TreeStats, search: SearchProvider<'_>, warnings: usize) {
        let search = match search {
            SearchProvider::Local => "local search".to_owned(),
            SearchProvider::Hosted(name) => format!("{name} search"),
        };
        self.success(&format!(
            "Navigation OK: {} links, {} groups, {} placeholders, depth {}, {search}, {warnings} warning(s)",
            stats.links, stats.groups, stats.placeholders, stats.depth
        ));
    }

    /// Write a document line to stdout.
    pub(crate) fn emit(&self, text: &str) -> std::io::Result<()> {
        self.document.write_line(text)
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.diagnostics.write_line(&style.apply_to(msg).to_string());
    }
}
