//! Configuration errors

use super::FolioError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> FolioError {
    FolioError::ConfigInvalid {
        message: message.into(),
    }
}

/// Attach the file path to a parse error raised without one
pub fn at_path(err: FolioError, path: impl Into<String>) -> FolioError {
    match err {
        FolioError::ConfigParseFailed { reason, .. } => parse_failed(path, reason),
        other => other,
    }
}
