//! `sx build` command implementation.

use std::path::PathBuf;

use clap::Args;
use sx_config::{CliSettings, Config};
use sx_site::{SiteBuilder, load_pages};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover sx.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long, env = "SX_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a page cannot be read, or the
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            out_dir: self.out_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.note(&format!("Config: {}", path.display()));
        }

        let pages = load_pages(&config)?;
        tracing::debug!(pages = pages.len(), "Loaded pages");
        if pages.is_empty() {
            output.note("No pages configured");
        }

        let report = SiteBuilder::from_config(&config).build(&pages, &config.out_dir)?;

        output.success(&format!(
            "Built {} page(s) into {}",
            report.written.len(),
            report.out_dir.display()
        ));
        Ok(())
    }
}
