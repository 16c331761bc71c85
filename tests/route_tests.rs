//! Route resolution and navigation highlighting through the binary

mod common;

use common::TestSite;
use predicates::prelude::*;

#[test]
fn test_route_home_activates_first_section() {
    let site = TestSite::from_fixture();

    site.cmd()
        .args(["route", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Site: Test Portfolio"))
        .stdout(predicate::str::contains("Route: home"))
        .stdout(predicate::str::contains("Active: about"))
        .stdout(predicate::str::contains("Sections: about, projects, experience"));
}

#[test]
fn test_route_blog_post_uses_sentinel() {
    let site = TestSite::from_fixture();

    site.cmd()
        .args(["route", "/blog/hello-world?ref=feed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: blog post 'hello-world'"))
        .stdout(predicate::str::contains("Page view: /blog/hello-world?ref=feed"))
        .stdout(predicate::str::contains("Active: blog"));
}

#[test]
fn test_route_custom_sentinel() {
    let site = TestSite::new();
    site.write_file("folio.yaml", "blog_sentinel: writing\n");

    site.cmd()
        .args(["route", "/blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: blog list"))
        .stdout(predicate::str::contains("Active: writing"));
}

#[test]
fn test_route_unknown_path() {
    let site = TestSite::new();

    site.cmd()
        .args(["route", "/contact"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route matches: /contact"));
}

#[test]
fn test_route_with_analytics_logs_page_view() {
    let site = TestSite::new();
    site.write_file("folio.yaml", "analytics_id: G-TEST123\n");

    site.cmd()
        .args(["route", "/blog"])
        .env("RUST_LOG", "folio=info")
        .assert()
        .success()
        .stderr(predicate::str::contains("page view"))
        .stderr(predicate::str::contains("G-TEST123"));
}

#[test]
fn test_route_default_site_title() {
    let site = TestSite::new();

    site.cmd()
        .args(["route", "/blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Site: Portfolio"));
}
