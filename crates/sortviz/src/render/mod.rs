//! Layer 2: Render contracts
//!
//! # Purpose
//!
//! This layer defines the contracts between the engine and its external
//! collaborators: the render sink that displays array snapshots and the
//! delay provider that paces the animation. The engine only ever talks to
//! these traits; concrete terminal, recording, or no-op implementations
//! are decided at wiring time.
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
//! Layer 2: Render contracts ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Render events and the sink capability.
pub mod sink;

/// Cooperative suspension between render events.
pub mod pacer;
