//! Command-line errors

use super::FolioError;

/// Creates an unknown shell error
pub fn unknown_shell(shell: impl Into<String>) -> FolioError {
    FolioError::UnknownShell {
        shell: shell.into(),
    }
}
