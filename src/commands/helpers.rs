//! Command helper utilities

use std::path::PathBuf;

use folio::config::Site;
use folio::error::{self, Result};

/// Resolve site path from optional argument
///
/// If a site path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_site_path(site: Option<PathBuf>) -> Result<PathBuf> {
    match site {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| error::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Open the site at the resolved path
pub fn open_site(site: Option<PathBuf>) -> Result<Site> {
    Site::open(resolve_site_path(site)?)
}
