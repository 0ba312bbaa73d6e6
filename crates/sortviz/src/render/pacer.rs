//! Cooperative suspension between render events.
//!
//! ## Purpose
//!
//! This module defines [`DelayProvider`], the suspend primitive the
//! engine calls after every render. The delay is a pacing mechanism, not
//! a deadline: it always elapses in full before the run continues, and
//! there is no cancellation path through it.
//!
//! ## Design notes
//!
//! * **Injected clock**: The engine never sleeps directly. Wiring decides
//!   whether a pause blocks the thread ([`ThreadDelay`]), does nothing
//!   ([`NoDelay`], used by the trace adapter), or yields to a custom
//!   scheduler.
//! * **Fresh reads**: The engine passes the currently configured interval
//!   on every call, so a speed change takes effect at the next suspension.
//!
//! ## Non-goals
//!
//! * This module does not implement timers or scheduling.
//! * This module does not provide timeouts or early wake-ups.

// ============================================================================
// Delay Capability
// ============================================================================

/// Suspend primitive: pause the running procedure for at least `millis`.
pub trait DelayProvider {
    /// Pause execution. Called exactly once after every rendered mutation.
    fn pause(&mut self, millis: u64);
}

/// Provider that returns immediately.
///
/// Used by the trace adapter and by tests, where pacing has no value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayProvider for NoDelay {
    fn pause(&mut self, _millis: u64) {}
}

/// Provider that blocks the current thread.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl DelayProvider for ThreadDelay {
    fn pause(&mut self, millis: u64) {
        std::thread::sleep(std::time::Duration::from_millis(millis));
    }
}
