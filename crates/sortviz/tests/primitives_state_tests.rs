#![cfg(feature = "dev")]
//! Tests for the per-variant state record.
//!
//! These tests verify the busy-guard state machine directly: single
//! flight per variant, silent rejection of busy-time requests, and the
//! step counter's reset behavior.
//!
//! ## Test Organization
//!
//! 1. **Guard** - begin/end transitions and re-entry rejection
//! 2. **Reset** - Busy-time no-op, idle-time replacement
//! 3. **Steps** - Monotonic accumulation between resets

use sortviz::internals::primitives::state::SortState;

// ============================================================================
// Guard Tests
// ============================================================================

/// Test the Idle -> Sorting -> Idle cycle.
#[test]
fn test_begin_end_cycle() {
    let mut state = SortState::new(vec![3, 1, 2]);
    assert!(!state.is_sorting());

    assert!(state.begin());
    assert!(state.is_sorting());

    state.end();
    assert!(!state.is_sorting());

    // A fresh begin is accepted again after completion.
    assert!(state.begin());
}

/// Test that a second begin is rejected while a run is active.
///
/// The rejection must leave the state untouched: no second run is
/// spawned and the array stays with the first owner.
#[test]
fn test_begin_rejects_reentry() {
    let mut state = SortState::new(vec![3, 1, 2]);
    assert!(state.begin());

    assert!(!state.begin(), "re-entrant start must be dropped");
    assert!(state.is_sorting());
    assert_eq!(state.array(), &[3, 1, 2]);
}

// ============================================================================
// Reset Tests
// ============================================================================

/// Test that reset is a silent no-op while sorting.
///
/// Array and step counter must both be unchanged.
#[test]
fn test_reset_while_busy_is_noop() {
    let mut state = SortState::new(vec![3, 1, 2]);
    state.add_steps(4);
    assert!(state.begin());

    assert!(!state.reset_with(vec![9, 9]));
    assert_eq!(state.array(), &[3, 1, 2]);
    assert_eq!(state.steps(), 4);
    assert!(state.is_sorting());
}

/// Test that an idle reset replaces the array and zeroes the counter.
#[test]
fn test_reset_while_idle_replaces() {
    let mut state = SortState::new(vec![3, 1, 2]);
    state.add_steps(7);

    assert!(state.reset_with(vec![5, 4]));
    assert_eq!(state.array(), &[5, 4]);
    assert_eq!(state.steps(), 0);
}

// ============================================================================
// Step Counter Tests
// ============================================================================

/// Test that credited steps accumulate monotonically between resets.
#[test]
fn test_steps_accumulate() {
    let mut state = SortState::new(vec![1]);
    assert_eq!(state.steps(), 0);

    state.add_steps(3);
    state.add_steps(0);
    state.add_steps(2);
    assert_eq!(state.steps(), 5);
}
