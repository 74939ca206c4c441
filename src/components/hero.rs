//! Full-height hero banner.

use leptos::prelude::*;

use crate::content::{BRAND, HERO_IMAGE};
use crate::state::nav::{NavState, Section};
use crate::state::router::RouterState;
use crate::util::nav_actions;

#[component]
pub fn Hero() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="hero__backdrop" style=format!("background-image: url('{HERO_IMAGE}')")></div>
            <div class="hero__content">
                <h1 class="hero__title">{BRAND}</h1>
                <p class="hero__tagline">"We Build Websites That Convert"</p>
                <button
                    class="nav-button hero__cta"
                    type="button"
                    on:click=move |_| nav_actions::scroll_to_section(router, nav, Section::Services)
                >
                    "View Services"
                </button>
            </div>
        </section>
    }
}
