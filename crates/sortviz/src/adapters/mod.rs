//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine for
//! different consumption modes:
//!
//! - **Animated**: live runs through injected render sinks, paced by a
//!   delay provider. This is the interactive control surface.
//! - **Trace**: offline runs recorded into a [`RunTrace`] with no pacing,
//!   for inspection and testing.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Render contracts
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`RunTrace`]: crate::engine::output::RunTrace

/// Live animated runs with per-variant state and sinks.
pub mod animated;

/// Offline recorded runs.
pub mod trace;
