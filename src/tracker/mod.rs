//! Scroll-synchronised section tracking for the sectioned home page
//!
//! - [`geometry`]: bounds, observation window and scroll metrics
//! - [`select`]: the pure active-section selection
//! - [`observer`]: the visibility observation seam
//! - [`navigation`]: navigation state and scrolling to a section
//!
//! [`SectionTracker`] ties them together: it subscribes to every section when
//! the home page mounts, folds each visibility batch into its per-section
//! ratios and recomputes the active section once per batch.

pub mod geometry;
pub mod navigation;
pub mod observer;
pub mod select;

pub use geometry::{Bounds, LayoutSnapshot, ScrollMetrics, SectionLayout, Window};
pub use navigation::{
    LayoutScroller, NavigationState, Navigator, ScrollBehavior, ScrollOutcome, Scroller,
};
pub use observer::{GeometryObserver, VisibilityEntry, VisibilityObserver};
pub use select::{SectionSample, select_active};

use tracing::{debug, warn};

use crate::routes::{BLOG_PREFIX, Route};

/// Sentinel active id for pages that are not laid out in sections
pub const DEFAULT_SENTINEL: &str = "blog";

/// Height of the fixed navigation bar, in pixels
pub const DEFAULT_NAV_INSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub nav_inset: f64,
    /// Active id used on routes under `sentinel_prefix`
    pub sentinel: String,
    pub sentinel_prefix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            nav_inset: DEFAULT_NAV_INSET,
            sentinel: DEFAULT_SENTINEL.to_string(),
            sentinel_prefix: BLOG_PREFIX.to_string(),
        }
    }
}

/// A mounted section and its latest measurement
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedSection {
    pub id: String,
    pub ratio: f64,
    pub bounds: Bounds,
}

/// Tracks which section of the home page is active
pub struct SectionTracker<O> {
    observer: O,
    config: TrackerConfig,
    sections: Vec<TrackedSection>,
    scroll: ScrollMetrics,
    mounted: bool,
    active: Option<String>,
}

impl<O: VisibilityObserver> SectionTracker<O> {
    pub fn new(observer: O, config: TrackerConfig) -> Self {
        Self {
            observer,
            config,
            sections: Vec::new(),
            scroll: ScrollMetrics::default(),
            mounted: false,
            active: None,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn sections(&self) -> &[TrackedSection] {
        &self.sections
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Scroll metrics the next recompute will use
    pub fn scroll(&self) -> ScrollMetrics {
        self.scroll
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Mount the view for `route`.
    ///
    /// On the sectioned route every section is observed and the first becomes
    /// active. Elsewhere nothing is observed and the sentinel becomes active
    /// when the route falls under the sentinel prefix.
    pub fn mount<S: AsRef<str>>(&mut self, route: &Route, section_ids: &[S]) -> Option<&str> {
        self.unmount();

        if route.is_sectioned() && !section_ids.is_empty() {
            for id in section_ids {
                let id = id.as_ref();
                if self.sections.iter().any(|s| s.id == id) {
                    warn!(section_id = id, "duplicate section id ignored");
                    continue;
                }
                self.observer.observe(id);
                self.sections.push(TrackedSection {
                    id: id.to_string(),
                    ratio: 0.0,
                    bounds: Bounds::default(),
                });
            }
            self.mounted = true;
            self.active = self.sections.first().map(|s| s.id.clone());
            debug!(route = %route, sections = self.sections.len(), "tracking sections");
        } else if route.matches_prefix(&self.config.sentinel_prefix) {
            self.active = Some(self.config.sentinel.clone());
            debug!(route = %route, sentinel = %self.config.sentinel, "non-sectioned page");
        } else {
            self.active = None;
        }

        self.active()
    }

    /// Stop observing and forget every measurement.
    pub fn unmount(&mut self) {
        self.scroll = ScrollMetrics::default();
        if !self.mounted {
            return;
        }
        for section in &self.sections {
            self.observer.unobserve(&section.id);
        }
        self.sections.clear();
        self.mounted = false;
        debug!("section tracking torn down");
    }

    /// Fold a whole batch of measurements in, then recompute once.
    ///
    /// Returns `true` if the active section changed. Entries for unknown
    /// sections are ignored, as is everything while unmounted.
    pub fn apply_batch(&mut self, batch: &[VisibilityEntry]) -> bool {
        if !self.mounted {
            return false;
        }
        for entry in batch {
            if let Some(section) = self.sections.iter_mut().find(|s| s.id == entry.id) {
                section.ratio = entry.ratio;
                section.bounds = entry.bounds;
            }
        }
        self.recompute()
    }

    /// Record new scroll metrics and recompute. Returns `true` on change.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !self.mounted {
            return false;
        }
        self.scroll = metrics;
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        let window = Window::below_nav(self.scroll.viewport_height, self.config.nav_inset);
        let samples: Vec<SectionSample<'_>> = self
            .sections
            .iter()
            .map(|s| SectionSample {
                id: &s.id,
                ratio: s.ratio,
                bounds: s.bounds,
            })
            .collect();

        let Some(index) = select_active(&samples, window, self.scroll) else {
            return false;
        };
        let next = &self.sections[index].id;
        if self.active.as_ref() == Some(next) {
            return false;
        }
        debug!(from = ?self.active, to = %next, "active section changed");
        self.active = Some(next.clone());
        true
    }
}
