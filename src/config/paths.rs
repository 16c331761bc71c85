//! User-level paths: where preferences live

use std::path::PathBuf;

use crate::error::{self, Result};

/// Directory name under the user's config directory
const CONFIG_DIR: &str = "folio";

/// Preference file name within the config directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Get the user config directory for folio
///
/// Uses the platform's standard config location with a `folio` subdirectory.
/// Can be overridden with the `FOLIO_CONFIG_DIR` environment variable.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_dir()
        .ok_or_else(|| error::preferences_store_failed("Could not determine config directory"))?;

    Ok(base.join(CONFIG_DIR))
}

pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PREFERENCES_FILE))
}
