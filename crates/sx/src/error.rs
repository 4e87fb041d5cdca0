//! CLI error types.

use sx_config::ConfigError;
use sx_site::{BuildError, VerifyError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Verify(#[from] VerifyError),

    #[error("site does not match snapshot ({0} differences)")]
    Mismatch(usize),
}
