//! # crafted-web
//!
//! Leptos + WASM single-page marketing site for the Crafted Web agency.
//!
//! This crate contains the static content catalog, the page sections, and
//! the two pieces of stateful logic behind them: the hash-driven view router
//! (home page vs. service detail) and the contact form controller that
//! forwards submissions to an external mail relay.
//!
//! State transitions are plain Rust so they test natively; everything that
//! touches the browser sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
