//! Error types and handling for Folio
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`content`]: Blog document errors
//! - [`config`]: Site configuration errors
//! - [`preferences`]: Theme preference errors
//! - [`showcase`]: Project and experience catalog errors
//! - [`fs`]: File system errors
//! - [`cli`]: Command-line errors
//!
//! A blog slug with no matching document is not an error: the loader returns
//! `Ok(None)` and the view renders its fallback.

pub mod cli;
pub mod config;
pub mod content;
pub mod fs;
pub mod preferences;
pub mod showcase;

pub use cli::unknown_shell;
pub use config::{
    at_path as config_at_path, invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use content::{
    read_failed as document_read_failed, unavailable as documents_unavailable,
};
pub use fs::{io_error, write_failed as file_write_failed};
pub use preferences::{invalid_theme, store_failed as preferences_store_failed};
pub use showcase::{project_not_found, route_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Diagnostic, Debug)]
pub enum FolioError {
    // Content errors
    #[error("Failed to read document: {path}")]
    #[diagnostic(code(folio::content::read_failed))]
    DocumentReadFailed { path: String, reason: String },

    #[error("Failed to enumerate documents in: {path}")]
    #[diagnostic(
        code(folio::content::unavailable),
        help("Check that posts_dir in folio.yaml points at a readable directory")
    )]
    DocumentsUnavailable { path: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(folio::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(folio::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(folio::config::invalid))]
    ConfigInvalid { message: String },

    // Preference errors
    #[error("Invalid theme: {value}")]
    #[diagnostic(code(folio::theme::invalid), help("Valid themes: dark, light"))]
    InvalidTheme { value: String },

    #[error("Preference store failed: {message}")]
    #[diagnostic(code(folio::theme::store_failed))]
    PreferencesStoreFailed { message: String },

    // Showcase and routing errors
    #[error("Project '{id}' not found")]
    #[diagnostic(
        code(folio::showcase::project_not_found),
        help("Run 'folio projects' to see available project ids")
    )]
    ProjectNotFound { id: u32 },

    #[error("No route matches: {path}")]
    #[diagnostic(
        code(folio::routes::not_found),
        help("Known routes: /, /blog, /blog/<slug>")
    )]
    RouteNotFound { path: String },

    // Command-line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(folio::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(folio::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(folio::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FolioError {
    fn from(err: serde_yaml::Error) -> Self {
        FolioError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::PreferencesStoreFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = FolioError::ProjectNotFound { id: 7 };
        assert_eq!(err.to_string(), "Project '7' not found");
    }

    #[test]
    fn test_error_code() {
        let err = FolioError::RouteNotFound {
            path: "/nope".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("folio::routes::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let folio_err: FolioError = io_err.into();
        assert!(matches!(folio_err, FolioError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let folio_err: FolioError = yaml_err.into();
        assert!(matches!(folio_err, FolioError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("invalid json content");
        let folio_err: FolioError = parse_result.unwrap_err().into();
        assert!(matches!(folio_err, FolioError::PreferencesStoreFailed { .. }));
    }

    test_error_contains!(
        test_invalid_theme_error,
        invalid_theme("sepia"),
        "Invalid theme",
        "sepia"
    );

    test_error_contains!(
        test_route_not_found_error,
        route_not_found("/about-me"),
        "No route matches",
        "/about-me"
    );

    #[test]
    fn test_document_read_failed() {
        let err = document_read_failed("posts/hello.md", "permission denied");
        assert!(matches!(err, FolioError::DocumentReadFailed { .. }));
        assert!(err.to_string().contains("Failed to read document"));
    }

    #[test]
    fn test_documents_unavailable() {
        let err = documents_unavailable("posts", "not a directory");
        assert!(matches!(err, FolioError::DocumentsUnavailable { .. }));
        assert!(err.to_string().contains("Failed to enumerate documents"));
    }

    #[test]
    fn test_config_parse_failed() {
        let err = config_parse_failed("/site/folio.yaml", "invalid YAML");
        assert!(matches!(err, FolioError::ConfigParseFailed { .. }));
        assert!(
            err.to_string()
                .contains("Failed to parse configuration file")
        );
    }

    #[test]
    fn test_config_read_failed() {
        let err = config_read_failed("/site/folio.yaml", "is a directory");
        assert!(matches!(err, FolioError::ConfigReadFailed { .. }));
    }

    #[test]
    fn test_config_invalid() {
        let err = config_invalid("sections must not be empty");
        assert!(matches!(err, FolioError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_preferences_store_failed() {
        let err = preferences_store_failed("disk full");
        assert!(matches!(err, FolioError::PreferencesStoreFailed { .. }));
    }

    #[test]
    fn test_project_not_found() {
        let err = project_not_found(42);
        assert!(matches!(err, FolioError::ProjectNotFound { id: 42 }));
    }

    #[test]
    fn test_file_write_failed() {
        let err = file_write_failed("/tmp/preferences.json", "read-only");
        assert!(matches!(err, FolioError::FileWriteFailed { .. }));
        assert!(err.to_string().contains("Failed to write file"));
    }

    #[test]
    fn test_io_error() {
        let err = io_error("some error");
        assert!(matches!(err, FolioError::IoError { .. }));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_unknown_shell() {
        let err = unknown_shell("tcsh");
        assert!(matches!(err, FolioError::UnknownShell { .. }));
        assert!(err.to_string().contains("tcsh"));
    }
}
