//! Projects and experience catalogs through the binary

mod common;

use common::TestSite;
use predicates::prelude::*;

#[test]
fn test_projects_list() {
    let site = TestSite::from_fixture();

    site.cmd()
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects (2):"))
        .stdout(predicate::str::contains("Mini Golf"))
        .stdout(predicate::str::contains("Dashboard"));
}

#[test]
fn test_projects_category_filter() {
    let site = TestSite::from_fixture();

    site.cmd()
        .args(["projects", "--category", "GAMES"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mini Golf"))
        .stdout(predicate::str::contains("Dashboard").not());
}

#[test]
fn test_project_detail_prefers_video() {
    let site = TestSite::from_fixture();

    site.cmd()
        .args(["projects", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Video: https://www.youtube.com/embed/LzQzw4D6lqI",
        ))
        .stdout(predicate::str::contains("Link: https://example.com/golf"))
        .stdout(predicate::str::contains("A physics mini golf game."));

    site.cmd()
        .args(["projects", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: /images/dash.png"));
}

#[test]
fn test_project_not_found() {
    let site = TestSite::from_fixture();

    site.cmd()
        .args(["projects", "--id", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project '99' not found"));
}

#[test]
fn test_projects_missing_catalog() {
    let site = TestSite::new();

    site.cmd()
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_experience() {
    let site = TestSite::from_fixture();

    site.cmd()
        .arg("experience")
        .assert()
        .success()
        .stdout(predicate::str::contains("Experience (2):"))
        .stdout(predicate::str::contains("Founder"))
        .stdout(predicate::str::contains("Apr 2022 - Jan 2025"))
        .stdout(predicate::str::contains("Game Development:"))
        .stdout(predicate::str::contains("Resume: /resume.pdf"));
}

#[test]
fn test_experience_skills_only() {
    let site = TestSite::from_fixture();

    site.cmd()
        .args(["experience", "--skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blender"))
        .stdout(predicate::str::contains("Founder").not());
}
