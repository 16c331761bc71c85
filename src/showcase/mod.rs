//! Project showcase and work experience, loaded from YAML catalogs

pub mod experience;
pub mod projects;

pub use experience::{ExperienceEntry, Resume, SkillGroup};
pub use projects::{Project, ProjectCatalog, ProjectMedia, ProjectModal, youtube_id};
