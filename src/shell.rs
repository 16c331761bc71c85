//! The application shell: routing, page views and the navigation bar state
//!
//! The shell owns everything that outlives a single page. Presentation layers
//! feed it locations, visibility batches and scroll metrics, then render from
//! [`Shell::navigation`] and [`Shell::route`].

use tracing::debug;

use crate::analytics::PageTracker;
use crate::error::{self, Result};
use crate::routes::{Location, Route};
use crate::tracker::{
    NavigationState, Navigator, ScrollBehavior, ScrollMetrics, ScrollOutcome, Scroller,
    SectionTracker, TrackerConfig, VisibilityEntry, VisibilityObserver,
};

pub struct Shell<O, S, P> {
    location: Option<Location>,
    route: Option<Route>,
    nav: NavigationState,
    tracker: SectionTracker<O>,
    navigator: Navigator,
    scroller: S,
    analytics: Option<P>,
    sections: Vec<String>,
}

impl<O, S, P> Shell<O, S, P>
where
    O: VisibilityObserver,
    S: Scroller,
    P: PageTracker,
{
    /// A shell that has not been navigated anywhere yet. The first section
    /// starts out active.
    pub fn new(
        observer: O,
        scroller: S,
        config: TrackerConfig,
        sections: Vec<String>,
        analytics: Option<P>,
    ) -> Self {
        let navigator = Navigator::new(config.nav_inset);
        let nav = NavigationState::new(sections.first().cloned().unwrap_or_default());
        Self {
            location: None,
            route: None,
            nav,
            tracker: SectionTracker::new(observer, config),
            navigator,
            scroller,
            analytics,
            sections,
        }
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn tracker(&self) -> &SectionTracker<O> {
        &self.tracker
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn analytics(&self) -> Option<&P> {
        self.analytics.as_ref()
    }

    /// Go to `href`.
    ///
    /// A changed pathname resets the scroll offset instantly and a changed
    /// location is reported as a page view. The menu always closes. The
    /// section tracker is remounted when the route itself changes.
    pub fn navigate(&mut self, href: &str) -> Result<&Route> {
        let route = Route::parse(href).ok_or_else(|| error::route_not_found(href))?;
        let location = Location::parse(href);

        let pathname_changed = self
            .location
            .as_ref()
            .is_none_or(|prev| prev.pathname != location.pathname);
        if pathname_changed {
            self.scroller.scroll_to(0.0, ScrollBehavior::Instant);
        }

        if self.location.as_ref() != Some(&location) {
            if let Some(analytics) = self.analytics.as_mut() {
                analytics.page_view(&location.page_path());
            }
        }

        self.nav.close_menu();

        if self.route.as_ref() != Some(&route) {
            debug!(route = %route, "route changed");
            self.tracker.mount(&route, self.sections.as_slice());
            self.sync_active();
        }
        if pathname_changed {
            let top = ScrollMetrics {
                offset: 0.0,
                ..self.tracker.scroll()
            };
            self.on_scroll(top);
        }

        self.location = Some(location);
        Ok(&*self.route.insert(route))
    }

    /// Click on a navigation item. From another route this navigates home
    /// and the scroll happens on [`Shell::route_settled`].
    pub fn select_section(&mut self, section_id: &str) -> Result<ScrollOutcome> {
        let outcome = self.navigator.select_section(
            section_id,
            self.route.as_ref(),
            &mut self.nav,
            &mut self.scroller,
        );
        if matches!(outcome, ScrollOutcome::Deferred { .. }) {
            self.navigate(&Route::Home.path())?;
        }
        Ok(outcome)
    }

    /// The router reports that the current route has rendered.
    pub fn route_settled(&mut self) -> ScrollOutcome {
        match self.route.as_ref() {
            Some(route) => self.navigator.route_settled(route, &mut self.scroller),
            None => ScrollOutcome::Idle,
        }
    }

    /// Returns `true` if the highlighted navigation item changed.
    pub fn on_visibility(&mut self, batch: &[VisibilityEntry]) -> bool {
        self.tracker.apply_batch(batch) && self.sync_active()
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        self.tracker.on_scroll(metrics) && self.sync_active()
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    fn sync_active(&mut self) -> bool {
        match self.tracker.active() {
            Some(active) if active != self.nav.active_section_id => {
                self.nav.active_section_id = active.to_string();
                true
            }
            _ => false,
        }
    }
}
