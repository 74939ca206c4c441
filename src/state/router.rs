//! View-state router: home page vs. a single service detail.
//!
//! DESIGN
//! ======
//! The URL hash is the route. `RouterState` owns the resolved [`Route`] and
//! talks to session history only through [`HistoryBackend`], so the same
//! transitions run against `MemoryHistory` in tests and `window.history` in
//! the browser. Scroll side effects are requested through a sequence
//! counter that an effect in `app` watches; the store itself never touches
//! the DOM.
//!
//! A route can only name a service from the static catalog. Any other
//! fragment resolves to [`Route::Home`].

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::content::{Service, find_service};
use crate::state::nav::Section;
use crate::util::history::{HistoryBackend, strip_hash};

/// Which top-level view is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Sectioned scroll page.
    #[default]
    Home,
    /// Full-page detail for one catalog service.
    Service(&'static Service),
}

impl Route {
    /// Resolve a raw `location.hash` value, stripping one leading `#`.
    #[must_use]
    pub fn from_fragment(raw: &str) -> Self {
        Self::from_id(strip_hash(raw))
    }

    /// Resolve an already-stripped fragment. Only an exact catalog id matches.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        if id.is_empty() {
            return Self::Home;
        }
        find_service(id).map_or(Self::Home, Self::Service)
    }

    /// Fragment this route writes into the URL; `None` for the root path.
    #[must_use]
    pub fn fragment(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Service(service) => Some(service.id),
        }
    }

    #[must_use]
    pub fn service(self) -> Option<&'static Service> {
        match self {
            Self::Home => None,
            Self::Service(service) => Some(service),
        }
    }
}

/// Router store provided to components as `RwSignal<RouterState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    route: Route,
    /// Bumped whenever the viewport should jump to the top.
    pub scroll_top_seq: u64,
    /// Section to scroll to once the home page has mounted.
    pub pending_anchor: Option<Section>,
}

impl RouterState {
    /// Initial state from the URL the page loaded with.
    ///
    /// A recognised service hash opens its detail view scrolled to the top.
    pub fn startup<H: HistoryBackend + ?Sized>(history: &H) -> Self {
        let route = Route::from_id(&history.fragment());
        let scroll_top_seq = match route {
            Route::Home => 0,
            Route::Service(service) => {
                log::debug!("startup route: {}", service.id);
                1
            }
        };
        Self { route, scroll_top_seq, pending_anchor: None }
    }

    #[must_use]
    pub fn current_route(&self) -> Route {
        self.route
    }

    /// Identifier of the open service detail, if any.
    #[must_use]
    pub fn active_service(&self) -> Option<&'static str> {
        self.route.fragment()
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.route == Route::Home
    }

    /// Switch to `route`, pushing one history entry for it.
    pub fn navigate<H: HistoryBackend + ?Sized>(&mut self, route: Route, history: &mut H) {
        history.push_fragment(route.fragment());
        self.route = route;
        if route != Route::Home {
            self.pending_anchor = None;
            self.scroll_top_seq += 1;
        }
    }

    /// Open the detail view for `id`. Unknown ids leave everything untouched.
    pub fn open_detail<H: HistoryBackend + ?Sized>(&mut self, id: &str, history: &mut H) -> bool {
        let Some(service) = find_service(id) else {
            log::warn!("ignoring open request for unknown service {id:?}");
            return false;
        };
        self.navigate(Route::Service(service), history);
        true
    }

    /// Return to the home view, pushing the root path.
    pub fn close_detail<H: HistoryBackend + ?Sized>(&mut self, history: &mut H) {
        self.navigate(Route::Home, history);
    }

    /// Return home and queue a scroll to `section` once the page mounts.
    pub fn close_detail_to<H: HistoryBackend + ?Sized>(&mut self, section: Section, history: &mut H) {
        self.close_detail(history);
        self.pending_anchor = Some(section);
    }

    /// Re-resolve the route after back/forward navigation. Never pushes.
    pub fn on_history_change<H: HistoryBackend + ?Sized>(&mut self, history: &H) {
        let route = Route::from_id(&history.fragment());
        if route != self.route {
            log::debug!("history moved to {:?}", route.fragment());
        }
        self.route = route;
        if route != Route::Home {
            self.pending_anchor = None;
        }
    }

    /// Anchor to scroll to for `section`; `None` while a detail view is open.
    #[must_use]
    pub fn anchor_target(&self, section: Section) -> Option<&'static str> {
        self.is_home().then_some(section.anchor())
    }

    /// Hand out the queued home-page scroll target, clearing it.
    pub fn take_pending_anchor(&mut self) -> Option<Section> {
        if self.is_home() { self.pending_anchor.take() } else { None }
    }
}
