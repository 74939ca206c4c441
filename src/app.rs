//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::RelayConfig;
use crate::content::BRAND;
use crate::net::mail_relay::RelayHandle;
use crate::pages::{home::HomePage, service_detail::ServiceDetailPage};
use crate::state::contact::{ContactState, REVERT_DELAY};
use crate::state::nav::NavState;
use crate::state::router::RouterState;
use crate::util::{deferred, history, scroll};

/// Root application component.
///
/// Provides the router, nav, and contact stores plus the mail relay, then
/// shows either the home page or the active service detail.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let router = RwSignal::new(RouterState::startup(&history::session()));
    let nav = RwSignal::new(NavState::default());
    let contact = RwSignal::new(ContactState::default());

    provide_context(router);
    provide_context(nav);
    provide_context(contact);
    provide_context(RelayHandle::from_config(RelayConfig::from_build_env()));

    install_history_listener(router);
    install_scroll_reset(router);
    install_status_revert(contact);

    let detail_open = move || router.with(|r| !r.is_home());

    view! {
        <Title text=BRAND/>
        <Meta name="description" content="Crafted Web builds custom, responsive, fast websites that convert."/>

        <div class="site">
            <Show when=detail_open fallback=|| view! { <HomePage/> }>
                <ServiceDetailPage/>
            </Show>
        </div>
    }
}

/// Follow browser back/forward by re-reading the hash on `popstate`.
#[cfg(feature = "csr")]
fn install_history_listener(router: RwSignal<RouterState>) {
    let handle = window_event_listener(leptos::ev::popstate, move |_| {
        crate::util::nav_actions::sync_from_history(router);
    });
    on_cleanup(move || handle.remove());
}

#[cfg(not(feature = "csr"))]
fn install_history_listener(_router: RwSignal<RouterState>) {}

/// Jump to the top whenever the router bumps `scroll_top_seq`.
fn install_scroll_reset(router: RwSignal<RouterState>) {
    let seq = Memo::new(move |_| router.with(|r| r.scroll_top_seq));
    Effect::new(move || {
        if seq.get() > 0 {
            scroll::to_top();
        }
    });
}

/// Schedule the auto-revert each time the contact store arms a new one.
///
/// Stale timers still fire, but `expire_revert` rejects their token.
fn install_status_revert(contact: RwSignal<ContactState>) {
    let pending = Memo::new(move |_| contact.with(ContactState::pending_revert));
    Effect::new(move || {
        if let Some(token) = pending.get() {
            deferred::schedule(REVERT_DELAY, move || {
                contact.update(|s| {
                    s.expire_revert(token);
                });
            });
        }
    });
}
