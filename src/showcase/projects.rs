//! Project catalog and the project detail modal

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([\w-]{11})").unwrap()
});

/// Extract the 11-character video id from a YouTube watch or short URL.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    /// Markdown description shown in the modal
    #[serde(default)]
    pub description: String,
}

/// What the modal shows above the description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMedia {
    Video { embed_url: String },
    Image { src: String },
    None,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl Project {
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_ref())
    }

    pub fn embed_url(&self) -> Option<String> {
        let video = non_empty(self.video.as_ref())?;
        youtube_id(video).map(|id| format!("https://www.youtube.com/embed/{id}"))
    }

    /// A recognisable video takes precedence over the thumbnail.
    pub fn media(&self) -> ProjectMedia {
        if let Some(embed_url) = self.embed_url() {
            return ProjectMedia::Video { embed_url };
        }
        match non_empty(self.thumbnail.as_ref()) {
            Some(src) => ProjectMedia::Image {
                src: src.to_string(),
            },
            None => ProjectMedia::None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a catalog file; a missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no project catalog");
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| error::config_at_path(e, path.display().to_string()))
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: u32) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| error::project_not_found(id))
    }

    /// Projects in a category (case-insensitive), in catalog order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Project> {
        self.projects.iter().filter(move |p| {
            p.category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        })
    }
}

/// Detail modal state. Page scrolling is locked while it is open.
#[derive(Debug, Clone, Default)]
pub struct ProjectModal {
    selected: Option<Project>,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, project: Project) {
        self.selected = Some(project);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
