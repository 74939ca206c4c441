//! Application state stores.
//!
//! ARCHITECTURE
//! ============
//! Each store is a plain struct wrapped in an `RwSignal` and provided via
//! context by `app::App`. Stores never reference each other; they meet only
//! at the boundaries in `util::history` and `net::mail_relay`.

pub mod contact;
pub mod nav;
pub mod router;
