//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage: the builder, adapter markers, variant names, render
//! contracts, and error type, all usable without qualification.

use sortviz::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that a complete trace workflow works with prelude imports.
#[test]
fn test_prelude_trace_workflow() {
    let mut viz = Sortviz::new().seed(5).adapter(Trace).build().unwrap();

    for variant in [Bubble, Selection, Insertion, Quick, Merge] {
        let trace: RunTrace = viz.run(variant);
        assert!(trace.is_sorted());
    }
}

/// Test that a complete animated workflow works with prelude imports.
#[test]
fn test_prelude_animated_workflow() {
    let mut viz = Sortviz::new()
        .seed(5)
        .animation_speed(0)
        .sink(Quick, NullSink)
        .pacer(NoDelay)
        .adapter(Animated)
        .build()
        .unwrap();

    viz.start(Quick);
    assert!(viz.array(Quick).windows(2).all(|w| w[0] <= w[1]));
}

/// Test that the error type is usable in result signatures.
#[test]
fn test_prelude_error_type() {
    fn build() -> Result<TraceSortviz, SortvizError> {
        Sortviz::new().adapter(Trace).build()
    }
    assert!(build().is_ok());
}

/// Test that render contract types are exported.
#[test]
fn test_prelude_render_contracts() {
    struct Probe(u64);

    impl RenderSink for Probe {
        fn render(&mut self, frame: &Frame<'_>) {
            self.0 = frame.step;
        }
    }

    impl DelayProvider for Probe {
        fn pause(&mut self, _millis: u64) {}
    }

    let _ = Highlights::Pair(0, 1).contains(1);
    let _ = Variant::ALL;
    let _ = Probe(0);
}
