//! Input validation for visualization configuration.
//!
//! ## Purpose
//!
//! This module validates builder configuration before an adapter is
//! constructed. Once built, the engine generates all of its own inputs
//! inside the validated bounds, so nothing is re-checked at run time.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Deferred reporting**: Builders record misconfiguration while
//!   chaining; `build()` hands the record here.
//!
//! ## Invariants
//!
//! * A configuration that passes validation can generate and sort arrays
//!   without any further failure mode.
//!
//! ## Non-goals
//!
//! * This module does not clamp or auto-correct invalid parameters.
//! * This module does not validate array contents; they are generated,
//!   never supplied by an untrusted source.

// Internal dependencies
use crate::primitives::errors::SortvizError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for visualization configuration.
///
/// Provides static methods returning `Result<(), SortvizError>` that
/// fail fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate the generator's value range.
    ///
    /// Any array size is acceptable (zero yields an empty run), but the
    /// value range must be non-empty for uniform sampling.
    pub fn validate_value_range(min: u32, max: u32) -> Result<(), SortvizError> {
        if min > max {
            return Err(SortvizError::InvalidValueRange { min, max });
        }
        Ok(())
    }

    /// Reject configurations where a parameter was set more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SortvizError> {
        match duplicate {
            Some(parameter) => Err(SortvizError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
