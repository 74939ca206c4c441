//! Page-section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the home page sections and shared chrome while reading
//! and writing the stores provided by `app::App` through Leptos context.

pub mod about;
pub mod contact_form;
pub mod hero;
pub mod portfolio_section;
pub mod services_section;
pub mod site_footer;
pub mod site_header;
