//! Copyright footer shared by the home and detail views.

use leptos::prelude::*;

use crate::content::BRAND;
use crate::util::date::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = current_year().map(|y| format!("{y} ")).unwrap_or_default();

    view! { <footer class="site-footer">{format!("© {year}{BRAND}. All rights reserved.")}</footer> }
}
