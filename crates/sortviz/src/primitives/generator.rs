//! Random array generation.
//!
//! ## Purpose
//!
//! This module produces the working arrays the engine animates: fixed
//! length, each element drawn independently and uniformly from a closed
//! integer range.
//!
//! ## Design notes
//!
//! * **Deterministic option**: Adapters hold a [`SmallRng`] seeded either
//!   explicitly (reproducible demos and tests) or, under `std`, from
//!   thread-local entropy.
//! * **No failure modes**: Bounds are validated at build time, so
//!   generation itself cannot fail.
//!
//! ## Invariants
//!
//! * The returned vector has exactly `size` elements.
//! * Every element lies within `min..=max`.
//! * Callers guarantee `min <= max` (enforced by `engine::validator`).
//!
//! ## Non-goals
//!
//! * This module does not validate bounds.
//! * This module does not decide array size or range defaults.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::primitives::errors::SortvizError;

// ============================================================================
// Generation
// ============================================================================

/// Generate `size` independent uniform draws from `min..=max`.
///
/// A `size` of zero yields an empty vector; sorting an empty array is a
/// complete, zero-event run.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, size: usize, min: u32, max: u32) -> Vec<u32> {
    (0..size).map(|_| rng.gen_range(min..=max)).collect()
}

// ============================================================================
// Seeding
// ============================================================================

/// Construct the adapter-owned generator from an optional seed.
///
/// Without `std` there is no ambient entropy source, so an explicit seed
/// is mandatory.
#[cfg(feature = "std")]
pub fn seed_rng(seed: Option<u64>) -> Result<SmallRng, SortvizError> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    Ok(SmallRng::seed_from_u64(seed))
}

/// Construct the adapter-owned generator from a mandatory seed.
#[cfg(not(feature = "std"))]
pub fn seed_rng(seed: Option<u64>) -> Result<SmallRng, SortvizError> {
    seed.map(SmallRng::seed_from_u64)
        .ok_or(SortvizError::SeedRequired)
}
