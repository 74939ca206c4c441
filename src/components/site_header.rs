//! Sticky site header: section navigation on home, a back button on details.

use leptos::prelude::*;

use crate::content::BRAND;
use crate::state::nav::{NavState, Section};
use crate::state::router::RouterState;
use crate::util::nav_actions;

const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";
const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";

/// Home-page header with desktop links and a collapsible mobile menu.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let menu_open = move || nav.with(|n| n.menu_open);

    view! {
        <header class="site-header">
            <nav class="site-header__bar">
                <div class="site-header__brand">{BRAND}</div>
                <button
                    class="site-header__menu-toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="icon"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || toggle_icon(menu_open())
                        />
                    </svg>
                </button>
                <div class="site-header__links">
                    <SectionLinks router=router nav=nav/>
                </div>
            </nav>
            <Show when=menu_open>
                <div class="site-header__dropdown">
                    <SectionLinks router=router nav=nav/>
                </div>
            </Show>
        </header>
    }
}

fn toggle_icon(open: bool) -> &'static str {
    if open { ICON_CLOSE } else { ICON_MENU }
}

#[component]
fn SectionLinks(router: RwSignal<RouterState>, nav: RwSignal<NavState>) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="nav-button"
                    type="button"
                    on:click=move |_| nav_actions::scroll_to_section(router, nav, section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}

/// Detail-view header: brand plus "Back to Home".
#[component]
pub fn DetailHeader() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    view! {
        <header class="site-header">
            <nav class="site-header__bar">
                <div class="site-header__brand">{BRAND}</div>
                <button
                    class="nav-button nav-button--back"
                    type="button"
                    on:click=move |_| nav_actions::close_service(router)
                >
                    "Back to Home"
                </button>
            </nav>
        </header>
    }
}
