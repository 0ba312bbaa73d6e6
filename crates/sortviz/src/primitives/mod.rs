//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Render contracts
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Algorithm variant identifiers and the per-variant registry.
pub mod variant;

/// Per-variant mutable run state.
pub mod state;

/// Random array generation.
pub mod generator;

/// Shared error types.
pub mod errors;
