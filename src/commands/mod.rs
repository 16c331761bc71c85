//! Command implementations for the folio CLI

pub mod completions;
pub mod experience;
pub mod helpers;
pub mod post;
pub mod posts;
pub mod projects;
pub mod route;
pub mod theme;
pub mod track;
pub mod version;
