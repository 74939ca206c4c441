//! Full-page detail for the active service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only while the router holds `Route::Service`. The long
//! description is split into paragraphs and bullet lists by
//! `content::description_blocks`.

use leptos::prelude::*;

use crate::components::{site_footer::SiteFooter, site_header::DetailHeader};
use crate::content::{DescriptionBlock, Service, description_blocks};
use crate::state::nav::Section;
use crate::state::router::RouterState;
use crate::util::nav_actions;

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let active = move || router.with(|r| r.current_route().service());

    view! {
        <div class="detail-page">
            <DetailHeader/>
            {move || active().map(|service| view! { <ServiceDetail service=service/> })}
            <SiteFooter/>
        </div>
    }
}

#[component]
fn ServiceDetail(service: &'static Service) -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let blocks = description_blocks(service.detailed_description);

    view! {
        <main class="detail">
            <div
                class="detail__image"
                style=format!("background-image: url('{}')", service.image_url)
            ></div>
            <div class="detail__body">
                <h1 class="detail__title">{service.title}</h1>
                <div class="detail__description">
                    {blocks.into_iter().map(render_block).collect_view()}
                </div>
                <button
                    class="nav-button detail__cta"
                    type="button"
                    on:click=move |_| nav_actions::close_service_to(router, Section::Contact)
                >
                    {service.cta_label}
                </button>
            </div>
        </main>
    }
}

fn render_block(block: DescriptionBlock) -> AnyView {
    match block {
        DescriptionBlock::Paragraph(text) => view! { <p class="detail__paragraph">{text}</p> }.into_any(),
        DescriptionBlock::Bullets(items) => view! {
            <ul class="detail__list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
