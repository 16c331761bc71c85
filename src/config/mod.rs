//! Configuration handling for Folio
//!
//! - `folio.yaml` at the site root: posts location, home page sections,
//!   navigation bar height, analytics
//! - the user config directory: persisted preferences

pub mod paths;
pub mod site;

pub use paths::{config_dir, preferences_path};
pub use site::{CONFIG_FILE, Site, SiteConfig};
