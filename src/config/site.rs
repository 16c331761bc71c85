//! Site configuration (folio.yaml) data structures
//!
//! Every field has a default, so a site root without `folio.yaml` is a valid
//! site with posts under `posts/`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};
use crate::routes::BLOG_PREFIX;
use crate::tracker::{DEFAULT_NAV_INSET, DEFAULT_SENTINEL, TrackerConfig};

/// Site configuration file name, at the site root
pub const CONFIG_FILE: &str = "folio.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the navigation bar
    pub title: String,

    /// Directory of blog documents, relative to the site root
    pub posts_dir: PathBuf,

    /// Project catalog, relative to the site root
    pub projects: PathBuf,

    /// Experience and skills catalog, relative to the site root
    pub experience: PathBuf,

    /// Section ids of the home page, in layout order
    pub sections: Vec<String>,

    /// Height of the fixed navigation bar in pixels
    pub nav_height: f64,

    /// Active navigation id on blog pages
    pub blog_sentinel: String,

    /// Analytics measurement id; page views are only reported when set
    pub analytics_id: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            posts_dir: PathBuf::from("posts"),
            projects: PathBuf::from("content/projects.yaml"),
            experience: PathBuf::from("content/experience.yaml"),
            sections: vec![
                "about".to_string(),
                "projects".to_string(),
                "experience".to_string(),
            ],
            nav_height: DEFAULT_NAV_INSET,
            blog_sentinel: DEFAULT_SENTINEL.to_string(),
            analytics_id: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate site configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize site configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(error::config_invalid("sections must not be empty"));
        }
        let mut seen = HashSet::new();
        for id in &self.sections {
            if id.trim().is_empty() {
                return Err(error::config_invalid("section ids must not be blank"));
            }
            if !seen.insert(id.as_str()) {
                return Err(error::config_invalid(format!("duplicate section id '{id}'")));
            }
        }
        if !self.nav_height.is_finite() || self.nav_height < 0.0 {
            return Err(error::config_invalid(format!(
                "nav_height must be a non-negative number, got {}",
                self.nav_height
            )));
        }
        Ok(())
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            nav_inset: self.nav_height,
            sentinel: self.blog_sentinel.clone(),
            sentinel_prefix: BLOG_PREFIX.to_string(),
        }
    }
}

/// A site root and its configuration
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl Site {
    /// Open the site at `root`, reading `folio.yaml` if present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE);

        let config = if config_path.is_file() {
            let yaml = std::fs::read_to_string(&config_path).map_err(|e| {
                error::config_read_failed(config_path.display().to_string(), e.to_string())
            })?;
            SiteConfig::from_yaml(&yaml)
                .map_err(|e| error::config_at_path(e, config_path.display().to_string()))?
        } else {
            debug!(root = %root.display(), "no {CONFIG_FILE}; using defaults");
            SiteConfig::default()
        };

        Ok(Self { root, config })
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.resolve(&self.config.posts_dir)
    }

    pub fn projects_path(&self) -> PathBuf {
        self.resolve(&self.config.projects)
    }

    pub fn experience_path(&self) -> PathBuf {
        self.resolve(&self.config.experience)
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }
}
