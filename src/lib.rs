//! Folio - the headless core of a personal portfolio and blog site
//!
//! - [`tracker`]: scroll-synchronised section tracking for the home page
//! - [`content`]: blog posts discovered from Markdown files with YAML front matter
//! - [`routes`] and [`shell`]: client-side routing and the state that outlives a page
//! - [`theme`]: the persisted light/dark preference
//! - [`showcase`]: project and experience catalogs
//!
//! The `folio` binary drives all of this from the command line against a site
//! directory.

pub mod analytics;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod routes;
pub mod shell;
pub mod showcase;
pub mod theme;
pub mod tracker;

pub use error::{FolioError, Result};
