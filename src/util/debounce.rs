//! Latest-wins debouncing for keystroke-driven async work.
//!
//! DESIGN
//! ======
//! Every edit claims a fresh ticket from a shared generation counter. A
//! ticket is current only while no newer ticket exists, so both decisions a
//! debounce needs collapse into one check: "should this quiet-timer fire
//! still run" and "may this response still touch the UI". Stale work simply
//! returns; nothing is cancelled in flight.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared generation counter for one debounced input.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Arc<AtomicU64>,
}

/// Claim on a single generation of a [`DebounceGate`].
#[derive(Clone, Debug)]
pub struct DebounceTicket {
    generation: u64,
    gate: Arc<AtomicU64>,
}

impl DebounceGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding tickets and claim a new one.
    pub fn begin(&self) -> DebounceTicket {
        let next = self.generation.load(Ordering::Relaxed) + 1;
        self.generation.store(next, Ordering::Relaxed);
        DebounceTicket { generation: next, gate: Arc::clone(&self.generation) }
    }

    /// Invalidate all outstanding tickets without claiming one. Used when an
    /// input is cleared and no work should run at all.
    pub fn invalidate(&self) {
        self.generation.store(self.generation.load(Ordering::Relaxed) + 1, Ordering::Relaxed);
    }
}

impl DebounceTicket {
    /// Whether no newer ticket has been claimed since this one.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.gate.load(Ordering::Relaxed) == self.generation
    }
}

/// Run `work` after a quiet period, unless a newer ticket supersedes it.
///
/// The ticket is handed to `work` so it can re-check currency after its own
/// awaits; a response that raced a newer keystroke must not apply. Claims a
/// ticket on every call (superseding older ones) but only schedules work in
/// the browser.
pub fn run_after_quiet<F, Fut>(gate: &DebounceGate, quiet_ms: u64, work: F)
where
    F: FnOnce(DebounceTicket) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let ticket = gate.begin();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(quiet_ms)).await;
        if !ticket.is_current() {
            return;
        }
        work(ticket).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ticket, quiet_ms, work);
}
