//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer drives a single variant's run: it owns the
//! mutation → render → suspend contract, dispatches to the algorithm
//! implementations, validates configuration, and defines the recorded
//! trace output type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Render contracts
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-run execution driver.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Recorded run output types.
pub mod output;
