//! Static portfolio gallery linking out to live projects.

use leptos::prelude::*;

use crate::content::{PORTFOLIO, PortfolioItem};
use crate::state::nav::Section;

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id=Section::Portfolio.anchor() class="portfolio">
            <h2 class="section-title">"Our Portfolio"</h2>
            <p class="portfolio__intro">"Check out some of the amazing websites we've built!"</p>
            <div class="portfolio__grid">
                {PORTFOLIO.iter().map(|item| view! { <PortfolioCard item=item/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: &'static PortfolioItem) -> impl IntoView {
    view! {
        <a class="portfolio-card" href=item.link target="_blank" rel="noopener noreferrer">
            <div class="card portfolio-card__inner">
                <div
                    class="portfolio-card__image"
                    style=format!("background-image: url('{}')", item.image_url)
                ></div>
                <div class="portfolio-card__body">
                    <h3 class="portfolio-card__title">{item.title}</h3>
                    <p class="portfolio-card__description">{item.description}</p>
                    <span class="portfolio-card__link">"View Project"</span>
                </div>
            </div>
        </a>
    }
}
