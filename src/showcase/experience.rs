//! Work experience and skill groups

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    /// Free-form period, e.g. `Apr 2022 - Jan 2025`
    pub period: String,
    /// Markdown bullet list
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Link to a downloadable resume document
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Resume {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load an experience file; a missing file is an empty resume.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no experience catalog");
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| error::config_at_path(e, path.display().to_string()))
    }

    /// Every distinct skill across entries, in first-seen order
    pub fn all_skills(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for skill in self.experience.iter().flat_map(|e| e.skills.iter()) {
            if !seen.contains(&skill.as_str()) {
                seen.push(skill);
            }
        }
        seen
    }
}
