//! Terminal reporting for sx commands.
//!
//! Everything goes to stderr so that piped output stays clean.

use std::fmt::Display;

use console::{Term, style};
use sx_site::DirDiff;

/// Writes command progress and results to the terminal.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, text: impl Display) {
        let _ = self.term.write_line(&text.to_string());
    }

    /// Secondary detail, dimmed.
    pub(crate) fn note(&self, msg: &str) {
        self.line(style(msg).dim());
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(style(msg).green().bold());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(style(msg).red());
    }

    /// One red entry per difference, in the order given.
    pub(crate) fn diffs(&self, diffs: &[DirDiff]) {
        for diff in diffs {
            self.line(style(diff).red());
        }
    }
}
