//! Visibility observation: the subscribe/unsubscribe seam over the platform
//!
//! A platform binding (an intersection observer in a browser, a layout engine
//! elsewhere) implements [`VisibilityObserver`] and delivers measurements to
//! the tracker as whole batches. [`GeometryObserver`] measures from a
//! [`LayoutSnapshot`] and stands in for the platform in the CLI and tests.

use tracing::trace;

use super::geometry::{Bounds, LayoutSnapshot, Window, visibility_ratio};

/// One section's measurement within a batch
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub id: String,
    pub ratio: f64,
    pub bounds: Bounds,
}

/// Subscribe to and unsubscribe from visibility changes of named sections
pub trait VisibilityObserver {
    fn observe(&mut self, section_id: &str);

    fn unobserve(&mut self, section_id: &str);
}

/// Measures observed sections from layout snapshots
#[derive(Debug, Clone)]
pub struct GeometryObserver {
    nav_inset: f64,
    observed: Vec<String>,
}

impl GeometryObserver {
    pub fn new(nav_inset: f64) -> Self {
        Self {
            nav_inset,
            observed: Vec::new(),
        }
    }

    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// One batch covering every observed section present in the snapshot.
    pub fn measure(&self, snapshot: &LayoutSnapshot) -> Vec<VisibilityEntry> {
        let window = Window::below_nav(snapshot.viewport_height, self.nav_inset);
        self.observed
            .iter()
            .filter_map(|id| {
                let bounds = snapshot.bounds_of(id)?;
                Some(VisibilityEntry {
                    id: id.clone(),
                    ratio: visibility_ratio(bounds, window),
                    bounds,
                })
            })
            .collect()
    }
}

impl VisibilityObserver for GeometryObserver {
    fn observe(&mut self, section_id: &str) {
        if !self.observed.iter().any(|id| id == section_id) {
            trace!(section_id, "observe");
            self.observed.push(section_id.to_string());
        }
    }

    fn unobserve(&mut self, section_id: &str) {
        trace!(section_id, "unobserve");
        self.observed.retain(|id| id != section_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::geometry::SectionLayout;

    fn snapshot(offset: f64) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport_height: 800.0,
            document_height: 2400.0,
            scroll_offset: offset,
            sections: vec![
                SectionLayout {
                    id: "about".to_string(),
                    top: 0.0,
                    height: 800.0,
                },
                SectionLayout {
                    id: "projects".to_string(),
                    top: 800.0,
                    height: 800.0,
                },
            ],
        }
    }

    #[test]
    fn test_measures_only_observed_sections() {
        let mut observer = GeometryObserver::new(100.0);
        observer.observe("projects");
        observer.observe("projects");
        observer.observe("missing");

        let batch = observer.measure(&snapshot(0.0));
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "projects");
        assert!(batch[0].ratio.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratios_account_for_nav_inset() {
        let mut observer = GeometryObserver::new(100.0);
        observer.observe("about");
        observer.observe("projects");

        let batch = observer.measure(&snapshot(400.0));
        // about: -400..400 against 100..800 -> 300/800
        assert!((batch[0].ratio - 0.375).abs() < 1e-9);
        // projects: 400..1200 against 100..800 -> 400/800
        assert!((batch[1].ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unobserve_stops_measurement() {
        let mut observer = GeometryObserver::new(0.0);
        observer.observe("about");
        observer.unobserve("about");
        assert!(observer.observed().is_empty());
        assert!(observer.measure(&snapshot(0.0)).is_empty());
    }
}
