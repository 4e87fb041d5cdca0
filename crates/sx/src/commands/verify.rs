//! `sx verify` command implementation.

use std::path::PathBuf;

use clap::Args;
use sx_site::compare_directories;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the verify command.
#[derive(Args)]
pub(crate) struct VerifyArgs {
    /// Directory with the expected site.
    expected: PathBuf,

    /// Directory with the built site.
    actual: PathBuf,
}

impl VerifyArgs {
    /// Execute the verify command.
    ///
    /// Prints every difference and fails if there is at least one.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let diffs = compare_directories(&self.expected, &self.actual)?;
        if diffs.is_empty() {
            output.success(&format!(
                "{} matches {}",
                self.actual.display(),
                self.expected.display()
            ));
            return Ok(());
        }

        output.diffs(&diffs);
        Err(CliError::Mismatch(diffs.len()))
    }
}
