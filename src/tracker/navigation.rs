//! Navigation state and in-page navigation to a named section
//!
//! Selecting a section from another route cannot scroll straight away: the
//! home page has to render first. The [`Navigator`] records the target and
//! scrolls once the router reports that the home route has settled.

use std::collections::HashMap;

use tracing::debug;

use super::geometry::LayoutSnapshot;
use crate::routes::Route;

/// Process-local navigation UI state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section_id: String,
    /// Mobile navigation expanded
    pub menu_open: bool,
}

impl NavigationState {
    pub fn new(active_section_id: impl Into<String>) -> Self {
        Self {
            active_section_id: active_section_id.into(),
            menu_open: false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The platform's scrolling capability
pub trait Scroller {
    /// Document offset of the section's top edge, if the section is rendered
    fn section_top(&self, section_id: &str) -> Option<f64>;

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOutcome {
    Scrolled { section_id: String, offset: f64 },
    /// Waiting for the home route to settle
    Deferred { section_id: String },
    /// No such section in the current document
    Missing { section_id: String },
    /// Nothing was pending
    Idle,
}

/// Scrolls to sections, deferring across route changes
#[derive(Debug, Clone)]
pub struct Navigator {
    nav_inset: f64,
    pending: Option<String>,
}

impl Navigator {
    pub fn new(nav_inset: f64) -> Self {
        Self {
            nav_inset,
            pending: None,
        }
    }

    /// Section waiting for the home route to settle
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Handle a click on a navigation target.
    ///
    /// Always closes the menu. On the sectioned route scrolls immediately;
    /// elsewhere returns [`ScrollOutcome::Deferred`] and the caller navigates
    /// home, then reports [`Navigator::route_settled`].
    pub fn select_section<S: Scroller>(
        &mut self,
        section_id: &str,
        current: Option<&Route>,
        nav: &mut NavigationState,
        scroller: &mut S,
    ) -> ScrollOutcome {
        nav.close_menu();

        if current.is_some_and(Route::is_sectioned) {
            self.pending = None;
            return self.scroll_to_section(section_id, scroller);
        }

        debug!(section_id, "deferring scroll until home route settles");
        self.pending = Some(section_id.to_string());
        ScrollOutcome::Deferred {
            section_id: section_id.to_string(),
        }
    }

    /// The router finished rendering `route`. Performs a pending scroll if the
    /// home route is now in place; any other route drops the pending target.
    pub fn route_settled<S: Scroller>(&mut self, route: &Route, scroller: &mut S) -> ScrollOutcome {
        let Some(section_id) = self.pending.take() else {
            return ScrollOutcome::Idle;
        };
        if !route.is_sectioned() {
            debug!(section_id = %section_id, route = %route, "dropping pending scroll");
            return ScrollOutcome::Idle;
        }
        self.scroll_to_section(&section_id, scroller)
    }

    fn scroll_to_section<S: Scroller>(&self, section_id: &str, scroller: &mut S) -> ScrollOutcome {
        let Some(top) = scroller.section_top(section_id) else {
            debug!(section_id, "scroll target not rendered; ignoring");
            return ScrollOutcome::Missing {
                section_id: section_id.to_string(),
            };
        };
        let offset = (top - self.nav_inset).max(0.0);
        scroller.scroll_to(offset, ScrollBehavior::Smooth);
        ScrollOutcome::Scrolled {
            section_id: section_id.to_string(),
            offset,
        }
    }
}

/// A [`Scroller`] over a layout snapshot; records where it was asked to go
#[derive(Debug, Clone, Default)]
pub struct LayoutScroller {
    tops: HashMap<String, f64>,
    max_offset: f64,
    offset: f64,
    history: Vec<(f64, ScrollBehavior)>,
}

impl LayoutScroller {
    pub fn new(snapshot: &LayoutSnapshot) -> Self {
        Self {
            tops: snapshot
                .sections
                .iter()
                .map(|s| (s.id.clone(), s.top))
                .collect(),
            max_offset: snapshot.max_offset(),
            offset: snapshot.scroll_offset,
            history: Vec::new(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn history(&self) -> &[(f64, ScrollBehavior)] {
        &self.history
    }
}

impl Scroller for LayoutScroller {
    fn section_top(&self, section_id: &str) -> Option<f64> {
        self.tops.get(section_id).copied()
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.offset = offset.clamp(0.0, self.max_offset);
        self.history.push((self.offset, behavior));
    }
}
