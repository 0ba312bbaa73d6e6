//! Trace adapter for offline recorded runs.
//!
//! ## Purpose
//!
//! This module provides the offline execution adapter: it runs one
//! variant to completion with a recording sink and no pacing, returning
//! the complete [`RunTrace`]. This is the mode tests and teaching
//! material use to inspect exactly which render events a run emits.
//!
//! ## Design notes
//!
//! * **No collaborators**: Render sinks and delay providers have no role
//!   in a recorded run; configuring them selects an error at `build()`.
//! * **Two entry points**: [`run`](TraceSortviz::run) generates a fresh
//!   random array; [`run_on`](TraceSortviz::run_on) replays a caller
//!   supplied array for deterministic scenarios.
//!
//! ## Invariants
//!
//! * Recorded frames match the live animation contract exactly; only the
//!   pacing differs.
//!
//! ## Non-goals
//!
//! * This adapter does not maintain per-variant state between runs; each
//!   run is independent and leaves nothing behind.
//! * This adapter does not pace or display anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::rngs::SmallRng;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::output::{RunTrace, TraceFrame};
use crate::engine::validator::Validator;
use crate::primitives::errors::SortvizError;
use crate::primitives::generator::{generate, seed_rng};
use crate::primitives::variant::Variant;
use crate::render::pacer::NoDelay;
use crate::render::sink::{Frame, RenderSink};

// ============================================================================
// Trace Builder
// ============================================================================

/// Builder for the offline trace processor.
#[derive(Debug, Clone)]
pub struct TraceSortvizBuilder {
    /// Elements per generated array.
    pub array_size: usize,

    /// Lower value bound, inclusive.
    pub min_value: u32,

    /// Upper value bound, inclusive.
    pub max_value: u32,

    /// Seed for reproducible array generation.
    pub seed: Option<u64>,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SortvizError>,

    /// Tracks a parameter that was set multiple times.
    pub duplicate_param: Option<&'static str>,
}

impl Default for TraceSortvizBuilder {
    fn default() -> Self {
        Self {
            array_size: crate::api::DEFAULT_ARRAY_SIZE,
            min_value: crate::api::DEFAULT_MIN_VALUE,
            max_value: crate::api::DEFAULT_MAX_VALUE,
            seed: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }
}

impl TraceSortvizBuilder {
    /// Build the trace processor.
    pub fn build(self) -> Result<TraceSortviz, SortvizError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_value_range(self.min_value, self.max_value)?;

        let rng = seed_rng(self.seed)?;
        Ok(TraceSortviz {
            array_size: self.array_size,
            min_value: self.min_value,
            max_value: self.max_value,
            rng,
        })
    }
}

// ============================================================================
// Trace Processor
// ============================================================================

/// Offline processor recording complete run traces.
#[derive(Debug, Clone)]
pub struct TraceSortviz {
    array_size: usize,
    min_value: u32,
    max_value: u32,
    rng: SmallRng,
}

impl TraceSortviz {
    /// Run `variant` on a freshly generated random array.
    pub fn run(&mut self, variant: Variant) -> RunTrace {
        let input = generate(&mut self.rng, self.array_size, self.min_value, self.max_value);
        self.run_on(variant, &input)
    }

    /// Run `variant` on a copy of `input`.
    ///
    /// The caller's array is not mutated; the trace owns its own copies.
    pub fn run_on(&self, variant: Variant, input: &[u32]) -> RunTrace {
        let mut array = input.to_vec();
        let mut recorder = Recorder::default();
        let mut pacer = NoDelay;

        SortExecutor::new(variant, &mut array, &mut recorder, &mut pacer, 0).run();

        RunTrace {
            variant,
            input: input.to_vec(),
            output: array,
            frames: recorder.frames,
        }
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// Sink that copies every frame into an owned list.
#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<TraceFrame>,
}

impl RenderSink for Recorder {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames.push(TraceFrame {
            step: frame.step,
            array: frame.array.to_vec(),
            highlights: frame.highlights,
        });
    }
}
