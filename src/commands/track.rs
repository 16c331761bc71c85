//! Track command implementation
//!
//! Replays a recorded page layout through the application shell: every frame
//! scrolls the page, measures each section and feeds the batch to the section
//! tracker, then prints the highlighted navigation item.

use console::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use folio::analytics::LogPageTracker;
use folio::error::{self, Result};
use folio::shell::Shell;
use folio::tracker::{
    GeometryObserver, LayoutScroller, LayoutSnapshot, ScrollOutcome, SectionLayout,
};

use crate::cli::TrackArgs;
use crate::commands::helpers::open_site;

type TrackShell = Shell<GeometryObserver, LayoutScroller, LogPageTracker>;

#[derive(Debug, Deserialize)]
struct TrackScript {
    viewport_height: f64,
    document_height: f64,
    sections: Vec<SectionLayout>,
    #[serde(default)]
    frames: Vec<f64>,
    #[serde(default = "default_start")]
    start: String,
    #[serde(default)]
    select: Option<String>,
}

fn default_start() -> String {
    "/".to_string()
}

impl TrackScript {
    fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&yaml)
            .map_err(|e| error::config_parse_failed(path.display().to_string(), e.to_string()))
    }

    fn layout(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport_height: self.viewport_height,
            document_height: self.document_height,
            scroll_offset: 0.0,
            sections: self.sections.clone(),
        }
    }
}

/// Run track command
pub fn run(site: Option<PathBuf>, args: TrackArgs) -> Result<()> {
    let site = open_site(site)?;
    let script = TrackScript::load(&args.layout)?;
    let layout = script.layout();
    let tracker_config = site.config.tracker_config();

    let mut shell: TrackShell = Shell::new(
        GeometryObserver::new(tracker_config.nav_inset),
        LayoutScroller::new(&layout),
        tracker_config,
        layout.sections.iter().map(|s| s.id.clone()).collect(),
        None,
    );

    shell.navigate(&script.start)?;
    println!(
        "{} {}",
        Style::new().bold().apply_to("Start:"),
        active(&shell)
    );

    if let Some(ref section_id) = script.select {
        let mut outcome = shell.select_section(section_id)?;
        report(&outcome);
        if matches!(outcome, ScrollOutcome::Deferred { .. }) {
            outcome = shell.route_settled();
            report(&outcome);
        }
        let offset = shell.scroller().offset();
        apply_frame(&mut shell, &layout, offset);
    }

    if !script.frames.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("  Offset  Active"));
    }
    for &offset in &script.frames {
        apply_frame(&mut shell, &layout, offset);
    }

    Ok(())
}

fn apply_frame(shell: &mut TrackShell, layout: &LayoutSnapshot, offset: f64) {
    let snapshot = layout.scrolled_to(offset);
    shell.on_scroll(snapshot.scroll_metrics());
    let batch = shell.tracker().observer().measure(&snapshot);
    shell.on_visibility(&batch);
    println!(
        "{:>8.0}  {}",
        snapshot.scroll_offset,
        Style::new().cyan().apply_to(active(shell))
    );
}

fn active(shell: &TrackShell) -> &str {
    &shell.navigation().active_section_id
}

fn report(outcome: &ScrollOutcome) {
    let label = Style::new().bold();
    match outcome {
        ScrollOutcome::Scrolled { section_id, offset } => {
            println!("{} {section_id} at {offset:.0}", label.apply_to("Scrolled:"));
        }
        ScrollOutcome::Deferred { section_id } => {
            println!(
                "{} {section_id} until home settles",
                label.apply_to("Deferred:")
            );
        }
        ScrollOutcome::Missing { section_id } => {
            println!("{} no section '{section_id}'", label.apply_to("Missing:"));
        }
        ScrollOutcome::Idle => {}
    }
}
