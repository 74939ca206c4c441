//! Scoped deferred tasks.
//!
//! A [`DeferredSlot`] holds at most one pending task. Arming it again, or
//! cancelling it, bumps a generation counter so any token handed out earlier
//! goes stale. Timers are never aborted in flight; a stale token simply
//! fails [`DeferredSlot::fire`] when its timer elapses.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use std::time::Duration;

/// Handle for one armed task. Only the most recently armed token can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeferredToken(u64);

/// Single-occupancy slot for a deferred task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeferredSlot {
    generation: u64,
    armed: bool,
}

impl DeferredSlot {
    /// Arm the slot, replacing whatever was pending.
    pub fn arm(&mut self) -> DeferredToken {
        self.generation += 1;
        self.armed = true;
        DeferredToken(self.generation)
    }

    /// Drop the pending task, if any.
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    /// Token of the task currently pending.
    #[must_use]
    pub fn pending(&self) -> Option<DeferredToken> {
        self.armed.then_some(DeferredToken(self.generation))
    }

    /// Consume the pending task if `token` is still current.
    pub fn fire(&mut self, token: DeferredToken) -> bool {
        if !self.armed || token.0 != self.generation {
            return false;
        }
        self.armed = false;
        true
    }
}

/// Run `task` once after `delay` on the browser event loop.
///
/// Without the `csr` feature there is no event loop to defer onto, so the
/// task is dropped unrun.
pub fn schedule<F>(delay: Duration, task: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        task();
    });
    #[cfg(not(feature = "csr"))]
    {
        drop((delay, task));
    }
}
