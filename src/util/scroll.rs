//! Viewport scrolling helpers.
//!
//! Browser-only; non-`csr` builds no-op so state code can call these freely.

/// Jump the viewport to the top of the page.
pub fn to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Smooth-scroll to the element with id `anchor`.
///
/// Returns `false` when no such element is mounted.
pub fn to_anchor(anchor: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(anchor))
        else {
            log::debug!("scroll target #{anchor} not mounted");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("no viewport to scroll to #{anchor}");
        false
    }
}
