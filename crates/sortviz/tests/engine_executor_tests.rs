#![cfg(feature = "dev")]
//! Tests for the per-run execution driver.
//!
//! These tests verify the engine's emission mechanics through custom
//! collaborators: the sink/pause interleaving, the configured interval
//! reaching the delay provider, and the degenerate-swap filter.
//!
//! ## Test Organization
//!
//! 1. **Pacing** - One pause per frame, after the render, with the
//!    configured interval
//! 2. **Filtering** - Mutations that change nothing emit nothing

use sortviz::internals::engine::executor::SortExecutor;
use sortviz::internals::render::pacer::DelayProvider;
use sortviz::internals::render::sink::{Frame, RenderSink};
use sortviz::prelude::*;

/// Sink recording the order of render and pause calls.
#[derive(Default)]
struct Journal {
    events: Vec<&'static str>,
    frames: u64,
}

impl RenderSink for Journal {
    fn render(&mut self, _frame: &Frame<'_>) {
        self.events.push("render");
        self.frames += 1;
    }
}

/// Delay provider recording every requested interval.
#[derive(Default)]
struct IntervalLog {
    pauses: Vec<u64>,
}

impl DelayProvider for IntervalLog {
    fn pause(&mut self, millis: u64) {
        self.pauses.push(millis);
    }
}

// ============================================================================
// Pacing Tests
// ============================================================================

/// Test that every frame is followed by exactly one pause carrying the
/// configured interval.
#[test]
fn test_one_pause_per_frame() {
    let mut array = [2, 1];
    let mut sink = Journal::default();
    let mut pacer = IntervalLog::default();

    let emitted = SortExecutor::new(Bubble, &mut array, &mut sink, &mut pacer, 7).run();

    assert_eq!(emitted, 1);
    assert_eq!(sink.frames, 1);
    assert_eq!(pacer.pauses, vec![7]);
    assert_eq!(array, [1, 2]);
}

/// Test that the run's return value counts emitted frames.
#[test]
fn test_run_returns_frame_count() {
    let mut array = [5, 4, 3, 2, 1];
    let mut sink = Journal::default();
    let mut pacer = IntervalLog::default();

    let emitted = SortExecutor::new(Insertion, &mut array, &mut sink, &mut pacer, 0).run();

    assert_eq!(emitted, sink.frames);
    assert_eq!(pacer.pauses.len() as u64, emitted);
    assert!(array.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Filtering Tests
// ============================================================================

/// Test that equal-value swaps are dropped before mutating or rendering.
///
/// Quick sort on a constant array would otherwise swap the pivot onto an
/// equal element at every partition.
#[test]
fn test_equal_value_swaps_are_filtered() {
    let mut array = [2, 2, 2, 2];
    let mut sink = Journal::default();
    let mut pacer = IntervalLog::default();

    let emitted = SortExecutor::new(Quick, &mut array, &mut sink, &mut pacer, 0).run();

    assert_eq!(emitted, 0);
    assert!(pacer.pauses.is_empty());
    assert_eq!(array, [2, 2, 2, 2]);
}

/// Test that in-place minima never render under selection.
#[test]
fn test_self_swaps_are_filtered() {
    let mut array = [1, 2, 3];
    let mut sink = Journal::default();
    let mut pacer = IntervalLog::default();

    let emitted = SortExecutor::new(Selection, &mut array, &mut sink, &mut pacer, 0).run();

    assert_eq!(emitted, 0);
    assert!(sink.events.is_empty());
}
