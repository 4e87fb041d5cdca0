//! Static site builder.
//!
//! Pages are rendered in parallel (rendering shares no state between pages)
//! and then written to the output directory in input order.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;
use sx_config::{Config, PageContent};
use sx_markup::{Markup, h, props};

use crate::page::{LayoutOptions, NavItem, Page, render_page};

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid page url {0:?}: must be a relative path without '..'")]
    InvalidUrl(String),
    #[error("Duplicate page url {0:?}")]
    DuplicateUrl(String),
    #[error("Page {0:?} has no content source")]
    MissingContent(String),
    #[error(
        "Refusing to clear output directory {}: it contains {}",
        out_dir.display(),
        protected.display()
    )]
    UnsafeOutDir { out_dir: PathBuf, protected: PathBuf },
}

impl BuildError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A rendered page ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub url: String,
    pub html: Markup,
}

/// Result of a site build.
#[derive(Debug)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Files written, in page order.
    pub written: Vec<PathBuf>,
}

/// Builds a static site from a list of pages.
#[derive(Debug, Default)]
pub struct SiteBuilder {
    options: LayoutOptions,
    /// Paths that must never lie inside a cleared output directory.
    protected: Vec<PathBuf>,
}

impl SiteBuilder {
    #[must_use]
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            protected: Vec::new(),
        }
    }

    /// Create a builder using the layout options from a configuration.
    ///
    /// The config directory and every page source are protected, so an
    /// `out_dir` of `"."` or `".."` is refused instead of wiping the project.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let config_dir = match config.config_path.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let sources = config.pages.iter().filter_map(|page| page.source.clone());

        let mut builder = Self::new(LayoutOptions::from(&config.site)).protect(config_dir);
        builder.protected.extend(sources);
        builder
    }

    /// Refuse to clear an output directory that is or contains `path`.
    #[must_use]
    pub fn protect(mut self, path: impl Into<PathBuf>) -> Self {
        self.protected.push(path.into());
        self
    }

    /// Render every page to a full HTML document.
    ///
    /// The navigation lists all pages in the given order. Output order
    /// matches input order.
    pub fn render_pages(&self, pages: &[Page]) -> Vec<RenderedPage> {
        let nav_items: Vec<NavItem> = pages.iter().map(NavItem::from).collect();

        pages
            .par_iter()
            .map(|page| {
                let html = render_page(page, &nav_items, &self.options);
                tracing::debug!(url = %page.url, bytes = html.len(), "Rendered page");
                RenderedPage {
                    url: page.url.clone(),
                    html,
                }
            })
            .collect()
    }

    /// Render all pages and write them to `out_dir`.
    ///
    /// The output directory is removed and recreated, so it only ever
    /// contains the pages of this build. Nothing is touched if a page url is
    /// invalid or the output directory holds a protected path.
    pub fn build(&self, pages: &[Page], out_dir: &Path) -> Result<BuildReport, BuildError> {
        validate_urls(pages)?;
        self.check_out_dir(out_dir)?;
        let rendered = self.render_pages(pages);

        if out_dir.exists() {
            fs::remove_dir_all(out_dir).map_err(|e| BuildError::io(out_dir, e))?;
            tracing::debug!(out_dir = %out_dir.display(), "Removed previous output");
        }
        fs::create_dir_all(out_dir).map_err(|e| BuildError::io(out_dir, e))?;

        let mut written = Vec::with_capacity(rendered.len());
        for page in &rendered {
            let path = out_dir.join(&page.url);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
            }
            fs::write(&path, page.html.as_str()).map_err(|e| BuildError::io(&path, e))?;
            tracing::debug!(path = %path.display(), "Wrote page");
            written.push(path);
        }

        tracing::info!(
            pages = written.len(),
            out_dir = %out_dir.display(),
            "Site built"
        );

        Ok(BuildReport {
            out_dir: out_dir.to_path_buf(),
            written,
        })
    }

    /// Fail if clearing `out_dir` would delete a protected path.
    ///
    /// Paths are compared after resolving symlinks and `.`/`..`, so only
    /// existing paths can clash.
    fn check_out_dir(&self, out_dir: &Path) -> Result<(), BuildError> {
        let Ok(resolved_out) = out_dir.canonicalize() else {
            return Ok(());
        };
        for path in &self.protected {
            let Ok(resolved) = path.canonicalize() else {
                continue;
            };
            if resolved.starts_with(&resolved_out) {
                tracing::warn!(
                    out_dir = %out_dir.display(),
                    protected = %path.display(),
                    "Output directory contains project files"
                );
                return Err(BuildError::UnsafeOutDir {
                    out_dir: out_dir.to_path_buf(),
                    protected: path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Check that every url is a unique relative file path inside the output
/// directory.
fn validate_urls(pages: &[Page]) -> Result<(), BuildError> {
    let mut seen = HashSet::new();
    for page in pages {
        let components: Vec<Component<'_>> = Path::new(&page.url).components().collect();
        let relative = components
            .iter()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        let named = components.iter().any(|c| matches!(c, Component::Normal(_)));
        if !relative || !named {
            return Err(BuildError::InvalidUrl(page.url.clone()));
        }
        if !seen.insert(page.url.as_str()) {
            return Err(BuildError::DuplicateUrl(page.url.clone()));
        }
    }
    Ok(())
}

/// Load the pages listed in a configuration.
///
/// `source` files are read as raw HTML fragments. `text` pages are escaped
/// and wrapped in a `<div>`.
pub fn load_pages(config: &Config) -> Result<Vec<Page>, BuildError> {
    config
        .pages
        .iter()
        .map(|entry| {
            let content = match entry.content() {
                Some(PageContent::Source(path)) => {
                    let html = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
                    Markup::raw(html)
                }
                Some(PageContent::Text(text)) => h!("div", props!(), text),
                None => return Err(BuildError::MissingContent(entry.url.clone())),
            };
            Ok(Page {
                title: entry.title.clone(),
                url: entry.url.clone(),
                content,
            })
        })
        .collect()
}
