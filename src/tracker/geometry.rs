//! Viewport geometry: section bounds, the observation window, scroll metrics

use serde::{Deserialize, Serialize};

/// Scroll distance from the bottom, in pixels, that still counts as "at the bottom"
pub const BOTTOM_TOLERANCE: f64 = 2.0;

/// Vertical extent of a section relative to the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Any overlap at all with the window, however small
    pub fn overlaps(&self, window: Window) -> bool {
        self.top < window.bottom && self.bottom > window.top
    }

    fn intersection(&self, window: Window) -> f64 {
        (self.bottom.min(window.bottom) - self.top.max(window.top)).max(0.0)
    }
}

/// The part of the viewport below the fixed navigation bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub top: f64,
    pub bottom: f64,
}

impl Window {
    pub fn below_nav(viewport_height: f64, nav_inset: f64) -> Self {
        Self {
            top: nav_inset,
            bottom: viewport_height.max(nav_inset),
        }
    }
}

/// Fraction of the section's height inside the window, in [0, 1].
pub fn visibility_ratio(bounds: Bounds, window: Window) -> f64 {
    let height = bounds.height();
    if height <= 0.0 {
        return 0.0;
    }
    (bounds.intersection(window) / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset
    pub offset: f64,
    /// Largest reachable scroll offset (document height minus viewport height)
    pub max_offset: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Within [`BOTTOM_TOLERANCE`] of the end of a scrollable page.
    pub fn at_bottom(&self) -> bool {
        self.max_offset > 0.0 && self.max_offset - self.offset <= BOTTOM_TOLERANCE
    }
}

/// A section's position in document coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Document layout at one scroll position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport_height: f64,
    pub document_height: f64,
    #[serde(default)]
    pub scroll_offset: f64,
    pub sections: Vec<SectionLayout>,
}

impl LayoutSnapshot {
    /// Same layout scrolled to `offset` (clamped to the scrollable range).
    #[must_use]
    pub fn scrolled_to(&self, offset: f64) -> Self {
        Self {
            scroll_offset: offset.clamp(0.0, self.max_offset()),
            ..self.clone()
        }
    }

    pub fn max_offset(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.scroll_offset,
            max_offset: self.max_offset(),
            viewport_height: self.viewport_height,
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionLayout> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Viewport-relative bounds of a section at the current scroll offset
    pub fn bounds_of(&self, id: &str) -> Option<Bounds> {
        self.section(id)
            .map(|s| Bounds::new(s.top - self.scroll_offset, s.height))
    }
}
