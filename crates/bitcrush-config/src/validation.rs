//! Preset validation.
//!
//! Control ranges are advisory: the effect accepts any value and handles
//! out-of-range ones gracefully. Validation reports values that fall
//! outside the advertised ranges so a preset author notices them; it never
//! rewrites the preset.
//!
//! # Example
//!
//! ```rust
//! use bitcrush_config::{Preset, validate_preset};
//!
//! let mut preset = Preset::new("Too Deep");
//! preset.bit_depth = 40.0;
//! assert!(validate_preset(&preset).is_err());
//! ```

use bitcrush_effects::{BIT_DEPTH_PARAM, TARGET_RATE_PARAM};
use thiserror::Error;

use crate::Preset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The preset has an empty name.
    #[error("preset name is empty")]
    EmptyName,

    /// The sample rate hint is zero.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check the bit depth against its advertised `[0, 32]` range.
pub fn validate_bit_depth(bits: f32) -> ValidationResult<()> {
    let desc = BIT_DEPTH_PARAM;
    if desc.contains(bits) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param: desc.string_id.to_string(),
            value: bits,
            min: desc.min,
            max: desc.max,
        })
    }
}

/// Check the target rate against its advertised `(0, sample_rate]` range.
pub fn validate_target_rate(hz: f32, sample_rate: u32) -> ValidationResult<()> {
    let desc = TARGET_RATE_PARAM.resolve(sample_rate as f32);
    if hz.is_nan() || hz <= desc.min || hz > desc.max {
        Err(ValidationError::OutOfRange {
            param: desc.string_id.to_string(),
            value: hz,
            min: desc.min,
            max: desc.max,
        })
    } else {
        Ok(())
    }
}

/// Validate every field of a preset, collecting all errors.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if preset.sample_rate == 0 {
        errors.push(ValidationError::InvalidSampleRate(0));
    }
    if let Err(e) = validate_bit_depth(preset.bit_depth) {
        errors.push(e);
    }
    if preset.sample_rate > 0
        && let Err(e) = validate_target_rate(preset.target_rate_hz(), preset.sample_rate)
    {
        errors.push(e);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
