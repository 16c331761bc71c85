//! File system errors

use super::FolioError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> FolioError {
    FolioError::IoError {
        message: message.into(),
    }
}
