//! Colored terminal output utilities.

use console::{Style, Term};
use webdemo_examples::{Catalog, LoadIssue};

/// Terminal output formatter for status messages on stderr.
///
/// Command results (trees, example dumps) go to stdout; everything printed
/// here is diagnostic.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print folder and example counts, highlighted.
    pub(crate) fn catalog_summary(&self, catalog: &Catalog) {
        let msg = format!(
            "Loaded {} folder(s), {} example(s)",
            catalog.folders().len(),
            catalog.examples().len()
        );
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Print one load issue: kind tag dimmed, message in yellow.
    pub(crate) fn issue(&self, issue: &LoadIssue) {
        let line = format!(
            "{} {}",
            self.dim.apply_to(format!("[{}]", issue.error.kind())),
            self.yellow.apply_to(issue)
        );
        let _ = self.term.write_line(&line);
    }

    /// Print a separator line.
    pub(crate) fn separator(&self) {
        let _ = self.term.write_line(&"-".repeat(70));
    }
}
