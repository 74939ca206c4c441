//! Navigation actions shared by header, hero, cards, and detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action applies a store transition against the session history and
//! then performs the browser side effect, keeping click handlers one-liners.

use leptos::prelude::*;

use crate::state::nav::{NavState, Section};
use crate::state::router::RouterState;
use crate::util::{history, scroll};

/// Smooth-scroll to `section` on the home page and close the mobile menu.
pub fn scroll_to_section(router: RwSignal<RouterState>, nav: RwSignal<NavState>, section: Section) {
    if let Some(anchor) = router.with_untracked(|r| r.anchor_target(section)) {
        scroll::to_anchor(anchor);
    }
    nav.update(NavState::close_menu);
}

/// Open the detail view for service `id`.
pub fn open_service(router: RwSignal<RouterState>, id: &str) {
    router.update(|r| {
        r.open_detail(id, &mut history::session());
    });
}

/// Back to the home view.
pub fn close_service(router: RwSignal<RouterState>) {
    router.update(|r| r.close_detail(&mut history::session()));
}

/// Back to the home view, then scroll to `section` once it mounts.
pub fn close_service_to(router: RwSignal<RouterState>, section: Section) {
    router.update(|r| r.close_detail_to(section, &mut history::session()));
}

/// Re-sync the router after browser back/forward.
pub fn sync_from_history(router: RwSignal<RouterState>) {
    router.update(|r| r.on_history_change(&history::session()));
}
