//! Route command implementation
//!
//! Resolves a path the way the site router does and reports which navigation
//! item the shell would highlight there.

use console::Style;
use std::path::PathBuf;

use folio::analytics::LogPageTracker;
use folio::error::Result;
use folio::routes::Route;
use folio::shell::Shell;
use folio::tracker::{GeometryObserver, LayoutScroller};

use crate::cli::RouteArgs;
use crate::commands::helpers::open_site;

/// Run route command
pub fn run(site: Option<PathBuf>, args: RouteArgs) -> Result<()> {
    let site = open_site(site)?;
    let tracker_config = site.config.tracker_config();
    let analytics = site.config.analytics_id.clone().map(LogPageTracker::new);

    let mut shell = Shell::new(
        GeometryObserver::new(tracker_config.nav_inset),
        LayoutScroller::default(),
        tracker_config,
        site.config.sections.clone(),
        analytics,
    );
    let route = shell.navigate(&args.path)?.clone();

    let label = Style::new().bold();
    println!("{} {}", label.apply_to("Site:"), site.config.title);
    println!("{} {}", label.apply_to("Route:"), describe(&route));
    println!("{} {}", label.apply_to("Path:"), route.path());
    if let Some(location) = shell.location() {
        println!("{} {}", label.apply_to("Page view:"), location.page_path());
    }
    println!(
        "{} {}",
        label.apply_to("Active:"),
        Style::new().cyan().apply_to(&shell.navigation().active_section_id)
    );
    if route.is_sectioned() {
        println!(
            "{} {}",
            label.apply_to("Sections:"),
            site.config.sections.join(", ")
        );
    }

    Ok(())
}

fn describe(route: &Route) -> String {
    match route {
        Route::Home => "home".to_string(),
        Route::BlogList => "blog list".to_string(),
        Route::BlogPost { slug } => format!("blog post '{slug}'"),
    }
}
