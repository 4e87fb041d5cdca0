//! Configuration management for sx.
//!
//! Parses `sx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! out_dir = "site"
//! lang = "en"
//! footer = "Copyright 2021 Ian Johnson"
//! stylesheets = ["style.css"]
//!
//! [[pages]]
//! title = "Page 1"
//! url = "page-1.html"
//! source = "pages/page-1.html"
//!
//! [[pages]]
//! title = "About"
//! url = "about.html"
//! text = "Plain text, escaped on output."
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `site.out_dir`, `site.lang`, `site.footer` and page titles support
//! `${VAR}` and `${VAR:-default}`.

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub out_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sx.toml";

/// Default output directory, relative to the config file.
const DEFAULT_OUT_DIR: &str = "site";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide layout options.
    pub site: SiteConfig,
    /// Pages to build, in navigation order.
    pub pages: Vec<PageConfig>,

    /// Resolved output directory (set after loading).
    #[serde(skip)]
    pub out_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site-wide layout options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Output directory, relative to the config file.
    out_dir: Option<String>,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: Option<String>,
    /// Footer text. No footer is rendered when unset.
    pub footer: Option<String>,
    /// Stylesheet URLs linked from every page.
    pub stylesheets: Vec<String>,
}

/// A single page entry.
#[derive(Debug, Deserialize)]
pub struct PageConfig {
    /// Page title, used for `<title>` and navigation.
    pub title: String,
    /// Output path relative to the output directory (e.g., "page-1.html").
    pub url: String,
    /// HTML fragment file used verbatim as the page body.
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Plain text body, escaped on output.
    #[serde(default)]
    pub text: Option<String>,
}

/// Where a page's body comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContent<'a> {
    /// HTML fragment file.
    Source(&'a Path),
    /// Plain text.
    Text(&'a str),
}

impl PageConfig {
    /// The page body source, if exactly one of `source`/`text` is set.
    #[must_use]
    pub fn content(&self) -> Option<PageContent<'_>> {
        match (&self.source, &self.text) {
            (Some(source), None) => Some(PageContent::Source(source)),
            (None, Some(text)) => Some(PageContent::Text(text)),
            _ => None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.footer`").
        field: String,
        /// Error message (e.g., "${`BUILD_YEAR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sx.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text, resolving paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(out_dir) = &settings.out_dir {
            self.out_dir.clone_from(out_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            out_dir: base.join(DEFAULT_OUT_DIR),
            ..Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for stylesheet in &self.site.stylesheets {
            require_non_empty(stylesheet, "site.stylesheets[]")?;
        }
        self.validate_pages()
    }

    fn validate_pages(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, page) in self.pages.iter().enumerate() {
            require_non_empty(&page.title, &format!("pages[{index}].title"))?;
            require_non_empty(&page.url, &format!("pages[{index}].url"))?;
            if page.content().is_none() {
                return Err(ConfigError::Validation(format!(
                    "pages[{index}] must set exactly one of source or text"
                )));
            }
            if !seen.insert(page.url.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "pages[{index}].url {:?} is used by another page",
                    page.url
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.site.out_dir, "site.out_dir")?;
        expand::expand_opt(&mut self.site.lang, "site.lang")?;
        expand::expand_opt(&mut self.site.footer, "site.footer")?;
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.title = expand::expand_env(&page.title, &format!("pages[{index}].title"))?;
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.out_dir = config_dir.join(self.site.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR));
        for page in &mut self.pages {
            if let Some(source) = &page.source {
                page.source = Some(config_dir.join(source));
            }
        }
    }
}
