//! Page modules for the two top-level views.
//!
//! ARCHITECTURE
//! ============
//! `app::App` shows exactly one page, chosen by the router store. Pages
//! compose `components` and own view-scoped effects.

pub mod home;
pub mod service_detail;
