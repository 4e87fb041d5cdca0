//! Static site assembly for sx.
//!
//! Wraps page fragments in a shared layout built from `sx-markup`
//! components, writes the results to an output directory, and compares a
//! built site against an expected snapshot.
//!
//! # Example
//!
//! ```no_run
//! use sx_config::Config;
//! use sx_site::{SiteBuilder, load_pages};
//!
//! let config = Config::load(None, None)?;
//! let pages = load_pages(&config)?;
//! SiteBuilder::from_config(&config).build(&pages, &config.out_dir)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod page;
mod verify;

pub use builder::{BuildError, BuildReport, RenderedPage, SiteBuilder, load_pages};
pub use page::{LayoutOptions, NavItem, Page};
pub use verify::{DirDiff, VerifyError, compare_directories};
