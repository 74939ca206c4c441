//! Sectioned scroll page: hero, about, services, portfolio, contact.

use leptos::prelude::*;

use crate::components::{
    about::About, contact_form::ContactSection, hero::Hero, portfolio_section::PortfolioSection,
    services_section::ServicesSection, site_footer::SiteFooter, site_header::SiteHeader,
};
use crate::state::router::RouterState;
use crate::util::scroll;

#[component]
pub fn HomePage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    // Honour a scroll queued before this page mounted (detail CTA -> contact).
    Effect::new(move || {
        if router.with_untracked(|r| r.pending_anchor.is_none()) {
            return;
        }
        if let Some(section) = router.try_update(RouterState::take_pending_anchor).flatten() {
            scroll::to_anchor(section.anchor());
        }
    });

    view! {
        <div class="home-page">
            <SiteHeader/>
            <Hero/>
            <About/>
            <ServicesSection/>
            <PortfolioSection/>
            <ContactSection/>
            <SiteFooter/>
        </div>
    }
}
