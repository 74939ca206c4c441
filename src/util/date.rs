//! Calendar helpers backed by the browser clock.

/// Current year from the browser's local clock; `None` off-browser.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
