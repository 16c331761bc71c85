//! Theme preference persistence through the binary

mod common;

use common::TestSite;
use predicates::prelude::*;

#[test]
fn test_theme_defaults_to_dark() {
    let site = TestSite::new();

    site.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark (default)"));
}

#[test]
fn test_theme_follows_light_system_preference() {
    let site = TestSite::new();

    site.cmd()
        .args(["theme", "--system", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light (system)"));
}

#[test]
fn test_theme_toggle_persists() {
    let site = TestSite::new();

    site.cmd()
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light (saved)"));
    assert!(site.read_preferences().contains("\"theme\": \"light\""));

    // Saved preference beats the system preference
    site.cmd()
        .args(["theme", "show", "--system", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light (saved)"));

    site.cmd()
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark (saved)"));
}

#[test]
fn test_theme_set_invalid() {
    let site = TestSite::new();

    site.cmd()
        .args(["theme", "set", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme: sepia"));
}

#[test]
fn test_corrupt_saved_theme_is_ignored() {
    let site = TestSite::new();
    std::fs::create_dir_all(&site.config_dir).unwrap();
    std::fs::write(
        site.config_dir.join("preferences.json"),
        "{\"theme\": \"purple\", \"other\": 1}",
    )
    .unwrap();

    site.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark (default)"));

    site.cmd().args(["theme", "set", "light"]).assert().success();
    let saved = site.read_preferences();
    assert!(saved.contains("\"theme\": \"light\""));
    assert!(saved.contains("\"other\": 1"));
}
