//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mail_relay` is the only outbound call the site makes: contact form
//! submissions forwarded to a third-party email relay.

pub mod mail_relay;
