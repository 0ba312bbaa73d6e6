//! Render events and the sink capability.
//!
//! ## Purpose
//!
//! This module defines [`Frame`], the payload of a single render event,
//! and [`RenderSink`], the injected capability that displays it. A sink
//! is chosen per variant when the adapter is built; the engine never
//! resolves a display target dynamically.
//!
//! ## Design notes
//!
//! * **Borrowed snapshots**: A frame borrows the working array; sinks
//!   that need to retain it copy it themselves.
//! * **Fire-and-forget**: `render` returns nothing. Display failures are
//!   the sink's own concern and must not be routed back into the engine.
//! * **Small highlight sets**: An order-changing mutation touches at most
//!   two indices, so highlights are an enum rather than a collection.
//!
//! ## Invariants
//!
//! * Within one run, frames arrive in mutation order, one per mutation,
//!   with nothing reordered, coalesced, or dropped.
//! * `step` starts at 1 for the first mid-run frame and increments by 1.
//!   Idle renders (initial population, reset) carry the state's counter.
//!
//! ## Non-goals
//!
//! * This module does not draw anything; see the `sortviz-term` crate for
//!   a terminal implementation.
//! * This module does not pace the animation (see [`pacer`](super::pacer)).

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::variant::Variant;

// ============================================================================
// Highlights
// ============================================================================

/// The indices touched by the mutation a frame narrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlights {
    /// No highlight: initial population and reset renders.
    None,

    /// A single settled or written index.
    One(usize),

    /// A swapped or shifted pair.
    Pair(usize, usize),
}

impl Highlights {
    /// Whether `index` is highlighted in this frame.
    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Highlights::None => false,
            Highlights::One(a) => a == index,
            Highlights::Pair(a, b) => a == index || b == index,
        }
    }

    /// Number of highlighted indices.
    pub fn count(&self) -> usize {
        match self {
            Highlights::None => 0,
            Highlights::One(_) => 1,
            Highlights::Pair(_, _) => 2,
        }
    }
}

impl Display for Highlights {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Highlights::None => f.write_str("-"),
            Highlights::One(a) => write!(f, "({a})"),
            Highlights::Pair(a, b) => write!(f, "({a},{b})"),
        }
    }
}

// ============================================================================
// Frame
// ============================================================================

/// One render event: a full array snapshot plus the touched indices.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Variant whose run produced this frame.
    pub variant: Variant,

    /// Render events emitted so far, this frame included.
    pub step: u64,

    /// Current array contents, in full.
    pub array: &'a [u32],

    /// Indices the mutation touched.
    pub highlights: Highlights,
}

// ============================================================================
// Sink Capability
// ============================================================================

/// Display capability injected per variant at wiring time.
pub trait RenderSink {
    /// Present one frame. Called once per mutation, in mutation order.
    fn render(&mut self, frame: &Frame<'_>);
}

/// Sink that discards every frame.
///
/// Used for variants a front-end chooses not to wire up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &Frame<'_>) {}
}
