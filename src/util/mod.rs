//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (history, scrolling,
//! timers, clock) from state and component logic so the state stores stay
//! testable off-browser.

pub mod date;
pub mod deferred;
pub mod history;
pub mod nav_actions;
pub mod scroll;
