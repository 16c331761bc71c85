//! Common test utilities for folio integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway site directory plus an isolated preferences directory
#[allow(dead_code)]
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
    /// Path used as FOLIO_CONFIG_DIR
    pub config_dir: PathBuf,
}

impl TestSite {
    /// Create an empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("site");
        let config_dir = temp.path().join("config");
        std::fs::create_dir_all(&path).expect("Failed to create site directory");
        Self {
            temp,
            path,
            config_dir,
        }
    }

    /// Create a site from the bundled fixture
    #[allow(dead_code)]
    pub fn from_fixture() -> Self {
        let site = Self::new();
        copy_dir_recursive(&fixture_path("site"), &site.path).expect("Failed to copy fixture site");
        site
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read the persisted preferences file
    #[allow(dead_code)]
    pub fn read_preferences(&self) -> String {
        std::fs::read_to_string(self.config_dir.join("preferences.json"))
            .expect("Failed to read preferences")
    }

    /// The folio binary pointed at this site
    pub fn cmd(&self) -> Command {
        let mut cmd = folio_cmd();
        cmd.env("FOLIO_SITE", &self.path)
            .env("FOLIO_CONFIG_DIR", &self.config_dir)
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn folio_cmd() -> Command {
    Command::cargo_bin("folio").unwrap()
}

/// Path to a file or directory under tests/common/fixtures
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &std::path::Path, dst: &std::path::Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
