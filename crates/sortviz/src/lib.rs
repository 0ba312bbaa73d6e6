//! # sortviz — Step-Animated Sorting Visualization for Rust
//!
//! A small engine that computes a sort while narrating it: after every
//! order-changing mutation it emits one render event (full array snapshot
//! plus the touched indices) and suspends for a configurable interval.
//! Five classic variants are provided (bubble, selection, insertion,
//! quick, and merge), each with fully independent state and a busy guard
//! against re-entrant starts and mid-run resets.
//!
//! ## Quick Start
//!
//! ### Recorded runs
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! // Build a deterministic offline runner
//! let mut viz = Sortviz::new()
//!     .array_size(8)       // 8 elements per array
//!     .min_value(5)        // values drawn from 5..=95
//!     .max_value(95)
//!     .seed(42)            // reproducible arrays
//!     .adapter(Trace)
//!     .build()?;
//!
//! let trace = viz.run(Bubble);
//!
//! assert!(trace.is_sorted());
//! println!("{}", trace);
//! # Result::<(), SortvizError>::Ok(())
//! ```
//!
//! ```text
//! Trace: bubble
//!   Input:  [40, 90, 10, 25, 74, 63, 8, 31]
//!   Output: [8, 10, 25, 31, 40, 63, 74, 90]
//!   Frames: 17
//!
//!   Step     Touched  Array
//!      1       (1,2)  [40, 10, 90, 25, 74, 63, 8, 31]
//!      ...
//! ```
//!
//! ### Live animation
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! struct Printer;
//!
//! impl RenderSink for Printer {
//!     fn render(&mut self, frame: &Frame<'_>) {
//!         println!("{} {:>4}  {:?}", frame.variant, frame.step, frame.array);
//!     }
//! }
//!
//! let mut viz = Sortviz::new()
//!     .animation_speed(0)          // no pause between frames
//!     .seed(7)
//!     .sink(Insertion, Printer)    // render capability, wired per variant
//!     .adapter(Animated)
//!     .build()?;
//!
//! viz.start(Insertion);            // runs to completion, frame by frame
//! assert!(!viz.is_sorting(Insertion));
//!
//! viz.reset(Insertion);            // fresh random array, idle render
//! assert_eq!(viz.steps(Insertion), 0);
//! # Result::<(), SortvizError>::Ok(())
//! ```
//!
//! ## The animation contract
//!
//! Within one run, render events are strictly ordered and tied one-to-one
//! to mutations: no reordering, no coalescing, no dropped frames, and no
//! mid-run render without a mutation. The suspension after each frame is
//! pacing, not a deadline: it always elapses before the run continues.
//! Runs are not cancellable; the busy guard only rejects re-entrant
//! starts and mid-run resets (both silently, by policy).
//!
//! ## Result and Error Handling
//!
//! Adapter `build()` returns `Result<_, SortvizError>`; the `?` operator
//! is idiomatic. Start and reset requests never fail; a request arriving
//! while the variant is busy is simply dropped.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable
//! default features and provide an explicit seed, since no ambient
//! entropy source is available:
//!
//! ```toml
//! [dependencies]
//! sortviz = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - variants, state records, generation, errors.
mod primitives;

// Layer 2: Render contracts - sink and delay capabilities.
mod render;

// Layer 3: Algorithms - the five sorting variants.
mod algorithms;

// Layer 4: Engine - run driver, validation, trace output.
mod engine;

// Layer 5: Adapters - animated and trace execution modes.
mod adapters;

// High-level fluent API for building a visualization.
mod api;

// Standard sortviz prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Animated, Trace},
        AnimatedSortviz, DelayProvider, Frame, Highlights, NoDelay, NullSink, RenderSink, RunTrace,
        SortvizBuilder as Sortviz, SortvizError, TraceFrame, TraceSortviz,
        Variant,
        Variant::{Bubble, Insertion, Merge, Quick, Selection},
    };

    #[cfg(feature = "std")]
    pub use crate::api::ThreadDelay;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod render {
        pub use crate::render::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
