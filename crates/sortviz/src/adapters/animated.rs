//! Animated adapter: live runs with per-variant state and sinks.
//!
//! ## Purpose
//!
//! This module provides the interactive control surface. It owns the
//! registry of five independently owned [`SortState`] records, the render
//! sink injected for each variant, and the shared delay provider, and it
//! maps start/reset requests onto engine runs under the busy-guard
//! policy.
//!
//! ## Design notes
//!
//! * **Explicit wiring**: Sinks are bound per variant at build time;
//!   unwired variants fall back to [`NullSink`]. Nothing is looked up by
//!   name at render time.
//! * **Silent rejection**: A start or reset arriving while that variant
//!   is mid-run is dropped: not an error, not queued. Runs are not
//!   cancellable; completion is the only way back to idle.
//! * **Fresh configuration reads**: The animation interval is forwarded
//!   to the engine at each start and read at every suspension, so
//!   [`set_speed`](AnimatedSortviz::set_speed) affects the next pause.
//!   Size and range changes take effect at the next reset, never mid-run.
//!
//! ## Invariants
//!
//! * At most one run per variant at any time.
//! * A variant's array length changes only through reset.
//! * Idle renders (build, reset) carry no highlights; mid-run renders
//!   always follow a mutation.
//!
//! ## Non-goals
//!
//! * This adapter does not queue requests or cancel runs.
//! * This adapter does not draw; display lives behind [`RenderSink`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use rand::rngs::SmallRng;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortvizError;
use crate::primitives::generator::{generate, seed_rng};
use crate::primitives::state::SortState;
use crate::primitives::variant::{Variant, VariantMap};
use crate::render::pacer::DelayProvider;
#[cfg(not(feature = "std"))]
use crate::render::pacer::NoDelay;
#[cfg(feature = "std")]
use crate::render::pacer::ThreadDelay;
use crate::render::sink::{Frame, Highlights, NullSink, RenderSink};

// ============================================================================
// Animated Builder
// ============================================================================

/// Builder for the animated processor.
pub struct AnimatedSortvizBuilder {
    /// Elements per generated array.
    pub array_size: usize,

    /// Lower value bound, inclusive.
    pub min_value: u32,

    /// Upper value bound, inclusive.
    pub max_value: u32,

    /// Pause between render events, in milliseconds.
    pub speed_ms: u64,

    /// Seed for reproducible array generation.
    pub seed: Option<u64>,

    /// Per-variant render capabilities.
    pub(crate) sinks: VariantMap<Option<Box<dyn RenderSink>>>,

    /// Suspension primitive shared by all variants.
    pub(crate) pacer: Option<Box<dyn DelayProvider>>,

    /// Tracks a parameter that was set multiple times.
    pub duplicate_param: Option<&'static str>,
}

impl Default for AnimatedSortvizBuilder {
    fn default() -> Self {
        Self {
            array_size: crate::api::DEFAULT_ARRAY_SIZE,
            min_value: crate::api::DEFAULT_MIN_VALUE,
            max_value: crate::api::DEFAULT_MAX_VALUE,
            speed_ms: crate::api::DEFAULT_SPEED_MS,
            seed: None,
            sinks: VariantMap::from_fn(|_| None),
            pacer: None,
            duplicate_param: None,
        }
    }
}

impl AnimatedSortvizBuilder {
    /// Build the animated processor.
    ///
    /// Creates all five state records, populates each with a fresh random
    /// array, and emits one highlight-free render per wired variant so
    /// the display starts from the idle picture.
    pub fn build(self) -> Result<AnimatedSortviz, SortvizError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_value_range(self.min_value, self.max_value)?;

        let mut rng = seed_rng(self.seed)?;
        let states = VariantMap::from_fn(|_| {
            SortState::new(generate(
                &mut rng,
                self.array_size,
                self.min_value,
                self.max_value,
            ))
        });
        let sinks = self
            .sinks
            .map(|slot| slot.unwrap_or_else(|| Box::new(NullSink)));

        #[cfg(feature = "std")]
        let pacer = self.pacer.unwrap_or_else(|| Box::new(ThreadDelay));
        #[cfg(not(feature = "std"))]
        let pacer = self.pacer.unwrap_or_else(|| Box::new(NoDelay));

        let mut viz = AnimatedSortviz {
            array_size: self.array_size,
            min_value: self.min_value,
            max_value: self.max_value,
            speed_ms: self.speed_ms,
            states,
            sinks,
            pacer,
            rng,
        };
        for variant in Variant::ALL {
            viz.render_idle(variant);
        }
        Ok(viz)
    }
}

// ============================================================================
// Animated Processor
// ============================================================================

/// Interactive processor: five independent variants, start/reset control.
pub struct AnimatedSortviz {
    array_size: usize,
    min_value: u32,
    max_value: u32,
    speed_ms: u64,
    states: VariantMap<SortState>,
    sinks: VariantMap<Box<dyn RenderSink>>,
    pacer: Box<dyn DelayProvider>,
    rng: SmallRng,
}

impl AnimatedSortviz {
    // ========================================================================
    // Control Surface
    // ========================================================================

    /// Run `variant` to completion through its sink, paced by the delay
    /// provider.
    ///
    /// Dropped silently if that variant is already mid-run; the request
    /// is neither queued nor surfaced as an error.
    pub fn start(&mut self, variant: Variant) {
        if !self.states[variant].begin() {
            return;
        }

        let speed = self.speed_ms;
        let emitted = {
            let state = &mut self.states[variant];
            let sink = &mut self.sinks[variant];
            SortExecutor::new(
                variant,
                state.array_mut(),
                sink.as_mut(),
                self.pacer.as_mut(),
                speed,
            )
            .run()
        };

        let state = &mut self.states[variant];
        state.add_steps(emitted);
        state.end();
    }

    /// Replace `variant`'s array with a fresh random one and render the
    /// idle picture.
    ///
    /// Dropped silently while that variant is mid-run: the array is never
    /// swapped out from under a running algorithm.
    pub fn reset(&mut self, variant: Variant) {
        if self.states[variant].is_sorting() {
            return;
        }
        let fresh = generate(&mut self.rng, self.array_size, self.min_value, self.max_value);
        let replaced = self.states[variant].reset_with(fresh);
        debug_assert!(replaced, "idle reset cannot be rejected");
        self.render_idle(variant);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current array contents for `variant`.
    pub fn array(&self, variant: Variant) -> &[u32] {
        self.states[variant].array()
    }

    /// Render events emitted by `variant` since its last reset.
    pub fn steps(&self, variant: Variant) -> u64 {
        self.states[variant].steps()
    }

    /// Whether `variant` is currently mid-run.
    pub fn is_sorting(&self, variant: Variant) -> bool {
        self.states[variant].is_sorting()
    }

    // ========================================================================
    // Runtime Configuration
    // ========================================================================

    /// Change the pause between render events, effective at the next
    /// suspension.
    pub fn set_speed(&mut self, millis: u64) {
        self.speed_ms = millis;
    }

    /// Change the generated array size, effective at the next reset.
    pub fn set_array_size(&mut self, size: usize) {
        self.array_size = size;
    }

    /// Change the generated value range, effective at the next reset.
    pub fn set_value_range(&mut self, min: u32, max: u32) -> Result<(), SortvizError> {
        Validator::validate_value_range(min, max)?;
        self.min_value = min;
        self.max_value = max;
        Ok(())
    }

    // ========================================================================
    // Idle Rendering
    // ========================================================================

    /// Render `variant`'s current array with no highlights.
    fn render_idle(&mut self, variant: Variant) {
        let state = &self.states[variant];
        let frame = Frame {
            variant,
            step: state.steps(),
            array: state.array(),
            highlights: Highlights::None,
        };
        self.sinks[variant].render(&frame);
    }
}
