//! Recorded run output types.
//!
//! ## Purpose
//!
//! This module defines [`RunTrace`], the complete record of one offline
//! run: the input array, every frame in emission order, and the final
//! sorted array. Traces are what the trace adapter returns and what the
//! crate's observable-behavior tests assert against.
//!
//! ## Design notes
//!
//! * **Owned snapshots**: Each [`TraceFrame`] owns a copy of the array as
//!   it looked when the frame was emitted, so a trace stays valid after
//!   the run.
//! * **Ergonomics**: Implements `Display` as a step table for quick
//!   inspection in examples and teaching material.
//!
//! ## Invariants
//!
//! * Frames appear in emission order; `step` runs 1, 2, 3, … with no gaps.
//! * `output` is `input` sorted: a non-decreasing permutation of the
//!   same multiset.
//!
//! ## Non-goals
//!
//! * This module does not execute runs; it only stores what one emitted.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::variant::Variant;
use crate::render::sink::Highlights;

// ============================================================================
// Trace Frame
// ============================================================================

/// One recorded render event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    /// Position in the run's emission order, starting at 1.
    pub step: u64,

    /// Array contents immediately after the narrated mutation.
    pub array: Vec<u32>,

    /// Indices the mutation touched.
    pub highlights: Highlights,
}

// ============================================================================
// Run Trace
// ============================================================================

/// Complete record of one offline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTrace {
    /// Variant that produced this trace.
    pub variant: Variant,

    /// Array contents before the run.
    pub input: Vec<u32>,

    /// Array contents after the run.
    pub output: Vec<u32>,

    /// Every render event, in emission order.
    pub frames: Vec<TraceFrame>,
}

impl RunTrace {
    /// Whether the final array is non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.output.windows(2).all(|w| w[0] <= w[1])
    }

    /// Number of render events the run emitted.
    pub fn steps(&self) -> u64 {
        self.frames.len() as u64
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RunTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Trace: {}", self.variant)?;
        writeln!(f, "  Input:  {:?}", self.input)?;
        writeln!(f, "  Output: {:?}", self.output)?;
        writeln!(f, "  Frames: {}", self.frames.len())?;

        if self.frames.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "  {:>4}  {:>10}  Array", "Step", "Touched")?;
        for frame in &self.frames {
            writeln!(
                f,
                "  {:>4}  {:>10}  {:?}",
                frame.step,
                frame.highlights.to_string(),
                frame.array
            )?;
        }
        Ok(())
    }
}
