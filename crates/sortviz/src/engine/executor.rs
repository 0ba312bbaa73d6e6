//! Per-run execution driver.
//!
//! ## Purpose
//!
//! This module provides [`SortExecutor`], the context a single run
//! executes inside. It owns the working array for the duration of the
//! run and centralizes the animation contract: after every
//! order-changing mutation, render one frame through the injected sink,
//! then suspend through the injected delay provider.
//!
//! ## Design notes
//!
//! * **One emission path**: Algorithms mutate only through
//!   [`swap`](SortExecutor::swap) and [`write`](SortExecutor::write) and
//!   emit only through [`frame`](SortExecutor::frame), so the
//!   render-per-mutation invariant lives in exactly one place.
//! * **Filtered swaps**: A swap that cannot change the observable array
//!   (identical indices or equal values) is dropped before it mutates or
//!   renders; no frame ever lacks a mutation.
//! * **Strict ordering**: Frames are emitted synchronously in mutation
//!   order. Nothing is reordered, coalesced, or dropped.
//!
//! ## Invariants
//!
//! * Every emitted frame follows exactly one mutation of the array.
//! * The delay provider is called exactly once per frame, after the sink.
//! * `steps` equals the number of frames emitted by the run.
//!
//! ## Non-goals
//!
//! * This module does not enforce the busy guard (see `adapters`).
//! * This module does not choose algorithms; it dispatches on [`Variant`].

// Internal dependencies
use crate::algorithms::{bubble, insertion, merge, quick, selection};
use crate::primitives::variant::Variant;
use crate::render::pacer::DelayProvider;
use crate::render::sink::{Frame, Highlights, RenderSink};

// ============================================================================
// Executor
// ============================================================================

/// Execution context for one variant run.
///
/// Borrows the variant's array and collaborators for the duration of the
/// run; [`run`](SortExecutor::run) consumes the context and returns the
/// number of frames emitted.
pub struct SortExecutor<'a, S: ?Sized, P: ?Sized> {
    variant: Variant,
    array: &'a mut [u32],
    sink: &'a mut S,
    pacer: &'a mut P,
    speed_ms: u64,
    steps: u64,
}

impl<'a, S, P> SortExecutor<'a, S, P>
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    /// Wrap a working array and its collaborators into a run context.
    pub fn new(
        variant: Variant,
        array: &'a mut [u32],
        sink: &'a mut S,
        pacer: &'a mut P,
        speed_ms: u64,
    ) -> Self {
        Self {
            variant,
            array,
            sink,
            pacer,
            speed_ms,
            steps: 0,
        }
    }

    /// Run the variant's algorithm to completion.
    ///
    /// Returns the number of frames emitted. The run is not cancellable;
    /// the only observable effects are the frame sequence and the final
    /// sorted array.
    pub fn run(mut self) -> u64 {
        match self.variant {
            Variant::Bubble => bubble::sort(&mut self),
            Variant::Selection => selection::sort(&mut self),
            Variant::Insertion => insertion::sort(&mut self),
            Variant::Quick => quick::sort(&mut self),
            Variant::Merge => merge::sort(&mut self),
        }
        self.steps
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    /// Current array contents.
    pub(crate) fn values(&self) -> &[u32] {
        self.array
    }

    /// Array length.
    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    // ========================================================================
    // Mutation and Emission
    // ========================================================================

    /// Swap two slots and narrate the swap with a pair-highlight frame.
    ///
    /// Degenerate swaps (identical indices or equal values) change no
    /// element order and are dropped without mutating or rendering.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i == j || self.array[i] == self.array[j] {
            return;
        }
        self.array.swap(i, j);
        self.frame(Highlights::Pair(i, j));
    }

    /// Overwrite one slot without rendering.
    ///
    /// Shift and merge steps pair this with an explicit
    /// [`frame`](SortExecutor::frame) call, since their highlight shape
    /// differs from a swap's.
    pub(crate) fn write(&mut self, index: usize, value: u32) {
        self.array[index] = value;
    }

    /// Emit one frame and suspend for the configured interval.
    ///
    /// The interval is read at each call, so a speed change takes effect
    /// at the very next suspension.
    pub(crate) fn frame(&mut self, highlights: Highlights) {
        self.steps += 1;
        let frame = Frame {
            variant: self.variant,
            step: self.steps,
            array: self.array,
            highlights,
        };
        self.sink.render(&frame);
        self.pacer.pause(self.speed_ms);
    }
}
