//! Per-variant mutable run state.
//!
//! ## Purpose
//!
//! This module defines [`SortState`], the record tracking one variant's
//! working array, busy flag, and step counter. One instance exists per
//! variant for the life of the controlling adapter; it is reset, never
//! destroyed.
//!
//! ## Design notes
//!
//! * **Single-flight**: [`SortState::begin`] is the only path into the
//!   sorting phase and rejects re-entry, so at most one run can own the
//!   array at a time.
//! * **Silent rejection**: Busy-time `begin` and `reset_with` requests
//!   return `false` and leave the state untouched. Rejection is policy,
//!   not an error.
//!
//! ## Invariants
//!
//! * `sorting` is true only between an accepted `begin` and the matching
//!   `end`.
//! * The array is never replaced while `sorting` is true.
//! * `steps` is monotonically non-decreasing between resets.
//!
//! ## Non-goals
//!
//! * This module does not run algorithms or emit render events.
//! * This module does not generate arrays; callers supply fresh snapshots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Sort State
// ============================================================================

/// Mutable record owned by one algorithm variant.
///
/// State machine: `Idle -> Sorting -> Idle`. The transition into
/// `Sorting` happens only through an accepted [`begin`](SortState::begin);
/// the transition back is unconditional on [`end`](SortState::end) when
/// the algorithm's loop structure completes. Runs are not cancellable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Working array, exclusively owned by the running procedure while
    /// `sorting` is true.
    array: Vec<u32>,

    /// Busy guard.
    sorting: bool,

    /// Render events emitted since the last reset. Informational only.
    steps: u64,
}

impl SortState {
    /// Create an idle state around a freshly generated array.
    pub fn new(array: Vec<u32>) -> Self {
        Self {
            array,
            sorting: false,
            steps: 0,
        }
    }

    /// Current array contents.
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// Whether a run currently owns the array.
    pub fn is_sorting(&self) -> bool {
        self.sorting
    }

    /// Render events emitted since the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Request the `Idle -> Sorting` transition.
    ///
    /// Returns `false` (and changes nothing) if a run is already active,
    /// guaranteeing single-flight semantics per variant.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.sorting {
            return false;
        }
        self.sorting = true;
        true
    }

    /// Unconditional `Sorting -> Idle` transition on run completion.
    pub fn end(&mut self) {
        self.sorting = false;
    }

    /// Replace the array and zero the step counter.
    ///
    /// Returns `false` (and changes nothing) while a run is active: the
    /// array must never be swapped out from under a running algorithm.
    #[must_use]
    pub fn reset_with(&mut self, fresh: Vec<u32>) -> bool {
        if self.sorting {
            return false;
        }
        self.array = fresh;
        self.steps = 0;
        true
    }

    /// Credit render events emitted by a completed run.
    pub fn add_steps(&mut self, emitted: u64) {
        self.steps += emitted;
    }

    /// Mutable access for the running algorithm.
    pub fn array_mut(&mut self) -> &mut [u32] {
        &mut self.array
    }
}
