//! Services showcase: one clickable card per catalog entry.

use leptos::prelude::*;

use crate::content::{SERVICES, Service};
use crate::state::nav::Section;
use crate::state::router::RouterState;
use crate::util::nav_actions;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=Section::Services.anchor() class="services">
            <h2 class="section-title">"Our Service"</h2>
            <div class="services__grid">
                {SERVICES.iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
            </div>
        </section>
    }
}

/// Card that opens the service's detail view on click.
#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    view! {
        <article class="card service-card" on:click=move |_| nav_actions::open_service(router, service.id)>
            <div
                class="service-card__image"
                style=format!("background-image: url('{}')", service.image_url)
            ></div>
            <h2 class="service-card__title">{service.title}</h2>
            <p class="service-card__description">{service.description}</p>
            <div class="service-card__more">
                <span>"Learn more"</span>
                <svg xmlns="http://www.w3.org/2000/svg" class="icon icon--small" viewBox="0 0 20 20" fill="currentColor">
                    <path
                        fill-rule="evenodd"
                        clip-rule="evenodd"
                        d="M10.293 5.293a1 1 0 011.414 0l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414-1.414L12.586 11H5a1 1 0 110-2h7.586l-2.293-2.293a1 1 0 010-1.414z"
                    />
                </svg>
            </div>
        </article>
    }
}
