//! Error types for visualization configuration.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can arise while building
//! a visualization. The running engine itself has no error taxonomy: its
//! inputs are internally generated within validated bounds, and busy-time
//! start/reset requests are dropped silently by policy rather than
//! surfaced as failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values.
//! * **Deferred**: Builder misconfiguration is recorded during chaining
//!   and reported once at `build()`.
//! * **No-std**: Implements `Display` always and `std::error::Error` when
//!   the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).
//! * This module does not model render sink or delay provider failures;
//!   those propagate per the collaborator's own contract.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for visualization configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortvizError {
    /// The configured value range is empty (`min > max`).
    InvalidValueRange {
        /// Configured lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The selected adapter does not accept the configured feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g. "Trace").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Building without `std` requires an explicit seed, since no entropy
    /// source is available for the array generator.
    SeedRequired,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortvizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidValueRange { min, max } => {
                write!(f, "Invalid value range: {min}..={max} is empty")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::SeedRequired => {
                write!(f, "An explicit seed is required when building without std")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for SortvizError {}
