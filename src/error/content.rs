//! Blog document errors

use super::FolioError;

/// Creates a document read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::DocumentReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a documents unavailable error (the storage location could not be listed)
pub fn unavailable(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::DocumentsUnavailable {
        path: path.into(),
        reason: reason.into(),
    }
}
