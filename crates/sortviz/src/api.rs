//! High-level API for building a visualization.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It
//! implements a fluent builder for configuring the visualization and
//! choosing an execution adapter (Animated or Trace).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized
//!   adapter builders.
//! * **Validated**: Parameters are validated during adapter construction;
//!   misconfiguration discovered while chaining is deferred to `build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortvizBuilder`] via `Sortviz::new()`.
//! 2. Chain configuration methods (`.array_size()`, `.animation_speed()`,
//!    `.sink()`, …).
//! 3. Select an adapter via `.adapter(Animated)` or `.adapter(Trace)` to
//!    get an execution builder, then call `.build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// Internal dependencies
use crate::adapters::animated::AnimatedSortvizBuilder;
use crate::adapters::trace::TraceSortvizBuilder;

// Publicly re-exported types
pub use crate::adapters::animated::AnimatedSortviz;
pub use crate::adapters::trace::TraceSortviz;
pub use crate::engine::output::{RunTrace, TraceFrame};
pub use crate::primitives::errors::SortvizError;
pub use crate::primitives::variant::{Variant, VariantMap};
pub use crate::render::pacer::{DelayProvider, NoDelay};
#[cfg(feature = "std")]
pub use crate::render::pacer::ThreadDelay;
pub use crate::render::sink::{Frame, Highlights, NullSink, RenderSink};

// ============================================================================
// Defaults
// ============================================================================

/// Default number of elements per generated array.
pub const DEFAULT_ARRAY_SIZE: usize = 20;

/// Default lower value bound, inclusive.
pub const DEFAULT_MIN_VALUE: u32 = 5;

/// Default upper value bound, inclusive.
pub const DEFAULT_MAX_VALUE: u32 = 95;

/// Default pause between render events, in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Animated, Trace};
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the visualization.
pub struct SortvizBuilder {
    /// Elements per generated array.
    pub array_size: Option<usize>,

    /// Lower value bound, inclusive.
    pub min_value: Option<u32>,

    /// Upper value bound, inclusive.
    pub max_value: Option<u32>,

    /// Pause between render events, in milliseconds.
    pub animation_speed: Option<u64>,

    /// Seed for reproducible array generation.
    pub seed: Option<u64>,

    /// Per-variant render capabilities (Animated only).
    pub(crate) sinks: VariantMap<Option<Box<dyn RenderSink>>>,

    /// Suspension primitive (Animated only).
    pub(crate) pacer: Option<Box<dyn DelayProvider>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for SortvizBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SortvizBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            array_size: None,
            min_value: None,
            max_value: None,
            animation_speed: None,
            seed: None,
            sinks: VariantMap::from_fn(|_| None),
            pacer: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SortvizAdapter,
    {
        A::convert(self)
    }

    /// Set the number of elements per generated array.
    ///
    /// Zero is legal: sorting an empty array completes immediately with
    /// no render events.
    pub fn array_size(mut self, size: usize) -> Self {
        if self.array_size.is_some() {
            self.duplicate_param = Some("array_size");
        }
        self.array_size = Some(size);
        self
    }

    /// Set the inclusive lower value bound.
    pub fn min_value(mut self, min: u32) -> Self {
        if self.min_value.is_some() {
            self.duplicate_param = Some("min_value");
        }
        self.min_value = Some(min);
        self
    }

    /// Set the inclusive upper value bound.
    pub fn max_value(mut self, max: u32) -> Self {
        if self.max_value.is_some() {
            self.duplicate_param = Some("max_value");
        }
        self.max_value = Some(max);
        self
    }

    /// Set the pause between render events, in milliseconds.
    pub fn animation_speed(mut self, millis: u64) -> Self {
        if self.animation_speed.is_some() {
            self.duplicate_param = Some("animation_speed");
        }
        self.animation_speed = Some(millis);
        self
    }

    /// Seed array generation for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Inject the render capability for one variant (Animated only).
    ///
    /// Variants left without a sink render into [`NullSink`].
    pub fn sink<S: RenderSink + 'static>(mut self, variant: Variant, sink: S) -> Self {
        if self.sinks[variant].is_some() {
            self.duplicate_param = Some("sink");
        }
        self.sinks[variant] = Some(Box::new(sink));
        self
    }

    /// Inject the suspension primitive (Animated only).
    ///
    /// Defaults to [`ThreadDelay`] under `std`.
    pub fn pacer<P: DelayProvider + 'static>(mut self, pacer: P) -> Self {
        if self.pacer.is_some() {
            self.duplicate_param = Some("pacer");
        }
        self.pacer = Some(Box::new(pacer));
        self
    }
}

// ============================================================================
// Adapter Markers
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SortvizAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SortvizBuilder`] into a specialized execution
    /// builder.
    fn convert(builder: SortvizBuilder) -> Self::Output;
}

/// Marker for live animated processing.
#[derive(Debug, Clone, Copy)]
pub struct Animated;

impl SortvizAdapter for Animated {
    type Output = AnimatedSortvizBuilder;

    fn convert(builder: SortvizBuilder) -> Self::Output {
        let mut result = AnimatedSortvizBuilder::default();

        if let Some(size) = builder.array_size {
            result.array_size = size;
        }
        if let Some(min) = builder.min_value {
            result.min_value = min;
        }
        if let Some(max) = builder.max_value {
            result.max_value = max;
        }
        if let Some(speed) = builder.animation_speed {
            result.speed_ms = speed;
        }
        result.seed = builder.seed;
        result.sinks = builder.sinks;
        result.pacer = builder.pacer;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for offline recorded processing.
#[derive(Debug, Clone, Copy)]
pub struct Trace;

impl SortvizAdapter for Trace {
    type Output = TraceSortvizBuilder;

    fn convert(builder: SortvizBuilder) -> Self::Output {
        let mut result = TraceSortvizBuilder::default();

        if let Some(size) = builder.array_size {
            result.array_size = size;
        }
        if let Some(min) = builder.min_value {
            result.min_value = min;
        }
        if let Some(max) = builder.max_value {
            result.max_value = max;
        }
        result.seed = builder.seed;
        result.duplicate_param = builder.duplicate_param;

        // Recorded runs have no live collaborators; reject rather than
        // silently ignore the wiring.
        if builder.sinks.iter().any(|(_, slot)| slot.is_some()) {
            result.deferred_error = Some(SortvizError::UnsupportedFeature {
                adapter: "Trace",
                feature: "render sink",
            });
        } else if builder.pacer.is_some() {
            result.deferred_error = Some(SortvizError::UnsupportedFeature {
                adapter: "Trace",
                feature: "delay provider",
            });
        } else if builder.animation_speed.is_some() {
            result.deferred_error = Some(SortvizError::UnsupportedFeature {
                adapter: "Trace",
                feature: "animation speed",
            });
        }

        result
    }
}
