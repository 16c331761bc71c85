//! Theme preference errors

use super::FolioError;

/// Creates an invalid theme error
pub fn invalid_theme(value: impl Into<String>) -> FolioError {
    FolioError::InvalidTheme {
        value: value.into(),
    }
}

/// Creates a preference store failed error
pub fn store_failed(message: impl Into<String>) -> FolioError {
    FolioError::PreferencesStoreFailed {
        message: message.into(),
    }
}
