//! Showcase and routing errors

use super::FolioError;

/// Creates a project not found error
pub fn project_not_found(id: u32) -> FolioError {
    FolioError::ProjectNotFound { id }
}

/// Creates a route not found error
pub fn route_not_found(path: impl Into<String>) -> FolioError {
    FolioError::RouteNotFound { path: path.into() }
}
