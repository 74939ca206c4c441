//! About blurb.

use leptos::prelude::*;

use crate::content::ABOUT_IMAGE;
use crate::state::nav::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="about">
            <div class="about__text">
                <h2 class="about__eyebrow">"Crafting Digital Success"</h2>
                <h2 class="about__headline">"Transforming your online presence"</h2>
                <p class="about__body">
                    "At Crafted Web, we specialize in elevating businesses by creating stunning, \
                     functional websites. Whether you lack an online presence or your current \
                     website falls short, our expert team is ready to transform your digital \
                     landscape. Let us craft you a website at a very affordable price so that \
                     you can stand out in the marketplace!"
                </p>
            </div>
            <div class="about__image" style=format!("background-image: url('{ABOUT_IMAGE}')")></div>
        </section>
    }
}
