//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::borrow::Cow;
use std::env::{self, VarError};

use crate::ConfigError;

/// Expand `${VAR}` references in `value`.
///
/// Strings without `${` are returned as-is, so a lone `$` (prices, shell
/// snippets in footers) never triggers expansion.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: match err.cause {
                VarError::NotPresent => format!("${{{}}} not set", err.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", err.var_name),
            },
        })
}

/// Expand an optional string in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(text) = value.as_deref() {
        *value = Some(expand_env(text, field)?);
    }
    Ok(())
}
