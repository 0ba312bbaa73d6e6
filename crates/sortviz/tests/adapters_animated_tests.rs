//! Tests for the animated adapter's control surface.
//!
//! These tests drive the interactive processor through a recording sink:
//! initial population, start-to-completion runs, reset behavior, and the
//! runtime configuration surface.
//!
//! ## Test Organization
//!
//! 1. **Initialization** - Idle render on build, independent states
//! 2. **Runs** - Start completes, credits steps, renders through the sink
//! 3. **Reset** - Fresh array, zeroed counter, idle render
//! 4. **Runtime Configuration** - Speed, size, and range setters

use std::cell::RefCell;
use std::rc::Rc;

use sortviz::prelude::*;

/// One recorded render event.
type Recorded = (u64, Vec<u32>, Highlights);

/// Sink sharing its recording with the test body.
#[derive(Clone, Default)]
struct SharedSink {
    frames: Rc<RefCell<Vec<Recorded>>>,
}

impl RenderSink for SharedSink {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames
            .borrow_mut()
            .push((frame.step, frame.array.to_vec(), frame.highlights));
    }
}

/// Animated processor wired to a recording sink on the bubble variant.
fn harness(size: usize) -> (AnimatedSortviz, SharedSink) {
    let sink = SharedSink::default();
    let viz = Sortviz::new()
        .array_size(size)
        .seed(11)
        .animation_speed(0)
        .sink(Bubble, sink.clone())
        .pacer(NoDelay)
        .adapter(Animated)
        .build()
        .unwrap();
    (viz, sink)
}

// ============================================================================
// Initialization Tests
// ============================================================================

/// Test that build populates every variant and renders the idle picture.
#[test]
fn test_build_renders_idle_frame() {
    let (viz, sink) = harness(10);

    let frames = sink.frames.borrow();
    assert_eq!(frames.len(), 1, "one idle render for the wired variant");
    let (step, array, highlights) = &frames[0];
    assert_eq!(*step, 0);
    assert_eq!(array.len(), 10);
    assert_eq!(*highlights, Highlights::None);

    for variant in Variant::ALL {
        assert_eq!(viz.array(variant).len(), 10);
        assert_eq!(viz.steps(variant), 0);
        assert!(!viz.is_sorting(variant));
    }
}

/// Test that each variant owns an independent array.
#[test]
fn test_variants_are_independent() {
    let (mut viz, _sink) = harness(12);

    let before: Vec<Vec<u32>> = Variant::ALL.iter().map(|&v| viz.array(v).to_vec()).collect();
    viz.start(Bubble);

    // Only bubble's state may have changed.
    for (&variant, untouched) in Variant::ALL.iter().zip(before.iter()).skip(1) {
        assert_eq!(viz.array(variant), *untouched);
        assert_eq!(viz.steps(variant), 0);
    }
}

// ============================================================================
// Run Tests
// ============================================================================

/// Test that start runs to completion and leaves the variant idle.
#[test]
fn test_start_runs_to_completion() {
    let (mut viz, sink) = harness(16);
    viz.start(Bubble);

    assert!(!viz.is_sorting(Bubble), "runs end back in idle");
    let array = viz.array(Bubble);
    assert!(array.windows(2).all(|w| w[0] <= w[1]), "array is sorted");

    let frames = sink.frames.borrow();
    // Idle render plus one frame per credited step.
    assert_eq!(frames.len() as u64, 1 + viz.steps(Bubble));
    let (_, last_array, _) = frames.last().unwrap();
    assert_eq!(last_array, viz.array(Bubble));
}

/// Test that a second start on a completed run sorts an already-sorted
/// array silently.
#[test]
fn test_restart_on_sorted_array_is_silent() {
    let (mut viz, sink) = harness(16);
    viz.start(Bubble);
    let after_first = sink.frames.borrow().len();
    let steps_after_first = viz.steps(Bubble);

    viz.start(Bubble);
    assert_eq!(sink.frames.borrow().len(), after_first, "no new frames");
    assert_eq!(viz.steps(Bubble), steps_after_first, "no new steps");
}

// ============================================================================
// Reset Tests
// ============================================================================

/// Test that reset regenerates the array, zeroes the counter, and
/// renders one highlight-free frame.
#[test]
fn test_reset_regenerates_and_renders() {
    let (mut viz, sink) = harness(16);
    viz.start(Bubble);
    let steps_before = viz.steps(Bubble);
    assert!(steps_before > 0);

    viz.reset(Bubble);
    assert_eq!(viz.steps(Bubble), 0);
    assert_eq!(viz.array(Bubble).len(), 16);

    let frames = sink.frames.borrow();
    let (step, array, highlights) = frames.last().unwrap();
    assert_eq!(*step, 0);
    assert_eq!(*highlights, Highlights::None);
    assert_eq!(array, viz.array(Bubble));
}

// ============================================================================
// Runtime Configuration Tests
// ============================================================================

/// Test that an array size change takes effect at the next reset.
#[test]
fn test_set_array_size_applies_on_reset() {
    let (mut viz, _sink) = harness(16);

    viz.set_array_size(5);
    assert_eq!(viz.array(Bubble).len(), 16, "size changes never mid-state");

    viz.reset(Bubble);
    assert_eq!(viz.array(Bubble).len(), 5);
}

/// Test that a range change takes effect at the next reset and that
/// empty ranges are rejected.
#[test]
fn test_set_value_range() {
    let (mut viz, _sink) = harness(16);

    assert_eq!(
        viz.set_value_range(9, 3),
        Err(SortvizError::InvalidValueRange { min: 9, max: 3 })
    );

    viz.set_value_range(1, 2).unwrap();
    viz.reset(Bubble);
    assert!(viz.array(Bubble).iter().all(|&v| (1..=2).contains(&v)));
}

/// Test that the speed setter is accepted mid-session.
#[test]
fn test_set_speed() {
    let (mut viz, _sink) = harness(8);
    viz.set_speed(250);
    viz.set_speed(0);
    viz.start(Bubble);
    assert!(!viz.is_sorting(Bubble));
}
