//! Per-block processing coefficients derived from the two crusher controls.
//!
//! # Theory
//!
//! Bit depth B selects a quantization step of `0.5^B`: each extra bit halves
//! the spacing of the amplitude grid. The exponent is biased down by
//! [`STEP_BIAS`] so that a sample lying exactly on a cell boundary is not
//! pushed into the neighbouring cell by single-precision rounding.
//!
//! The decimation ratio is the fraction of native samples that survive the
//! zero-order hold: `target_rate / native_rate`, capped at 1 (a target rate at
//! or above the native rate means no decimation).
//!
//! # Out-of-range controls
//!
//! Control values are advisory-bounded only, so derivation never fails:
//!
//! | Input | Result |
//! |-------|--------|
//! | `bit_depth <= 0` or NaN | `step = +inf`: quantizer passes samples through |
//! | `bit_depth` too large for a normal `f32` step | `step = +inf` |
//! | `target_rate >= native_rate` | `ratio = 1.0` |
//! | `target_rate <= 0` or NaN | `ratio = MIN_RATIO` |
//! | `native_rate <= 0` or NaN | `ratio = 1.0` |

use libm::powf;

/// Exponent bias applied to the bit depth when computing the step.
pub const STEP_BIAS: f32 = 0.001;

/// Smallest decimation ratio.
///
/// `f32::EPSILON` is the smallest decrement that still moves an accumulator
/// sitting at 1.0, so the hold always releases eventually.
pub const MIN_RATIO: f32 = f32::EPSILON;

/// Coefficients consumed by the quantizer and decimator for one block.
///
/// Cheap to copy; recomputed whenever a control value changes and never
/// persisted across instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrushCoefficients {
    /// Quantization step. Strictly positive; `+inf` disables quantization.
    pub step: f32,
    /// Highest representable level index, `2^bits - 1`. Informational.
    pub max_level: f32,
    /// Decimation ratio in `(0, 1]`.
    pub ratio: f32,
}

impl CrushCoefficients {
    /// Coefficients that leave the signal untouched.
    pub const TRANSPARENT: Self = Self {
        step: f32::INFINITY,
        max_level: 0.0,
        ratio: 1.0,
    };

    /// Derive coefficients from raw control values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitcrush_core::CrushCoefficients;
    ///
    /// let c = CrushCoefficients::derive(8.0, 22050.0, 44100.0);
    /// assert_eq!(c.ratio, 0.5);
    /// assert_eq!(c.max_level, 255.0);
    /// assert!(c.step > 0.0 && c.step.is_finite());
    /// ```
    pub fn derive(bit_depth: f32, target_rate: f32, native_rate: f32) -> Self {
        Self {
            step: quantization_step(bit_depth),
            max_level: max_level(bit_depth),
            ratio: decimation_ratio(target_rate, native_rate),
        }
    }

    /// Returns `true` when the quantizer is disabled.
    #[inline]
    pub fn is_pass_through(&self) -> bool {
        !self.step.is_finite()
    }
}

impl Default for CrushCoefficients {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// `0.5^(bit_depth - STEP_BIAS)`, or `+inf` when the bit depth is
/// non-positive or the step would not be a normal float.
#[inline]
pub fn quantization_step(bit_depth: f32) -> f32 {
    if bit_depth.is_nan() || bit_depth <= 0.0 {
        return f32::INFINITY;
    }
    let step = powf(0.5, bit_depth - STEP_BIAS);
    if step.is_normal() { step } else { f32::INFINITY }
}

/// `2^bit_depth - 1`, or 0 for non-positive bit depths.
#[inline]
pub fn max_level(bit_depth: f32) -> f32 {
    if bit_depth.is_nan() || bit_depth <= 0.0 {
        return 0.0;
    }
    powf(2.0, bit_depth) - 1.0
}

/// Fraction of native samples kept by the hold, in `[MIN_RATIO, 1.0]`.
#[inline]
pub fn decimation_ratio(target_rate: f32, native_rate: f32) -> f32 {
    if native_rate.is_nan() || native_rate <= 0.0 || target_rate >= native_rate {
        return 1.0;
    }
    if target_rate.is_nan() || target_rate <= 0.0 {
        return MIN_RATIO;
    }
    (target_rate / native_rate).max(MIN_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_halves_per_bit() {
        let s8 = quantization_step(8.0);
        let s9 = quantization_step(9.0);
        assert!((s8 / s9 - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_is_biased_slightly_coarse() {
        let s = quantization_step(4.0);
        assert!(s > 1.0 / 16.0);
        assert!(s < 1.0 / 16.0 * 1.001);
    }

    #[test]
    fn test_step_non_positive_bits_pass_through() {
        assert_eq!(quantization_step(0.0), f32::INFINITY);
        assert_eq!(quantization_step(-3.0), f32::INFINITY);
        assert_eq!(quantization_step(f32::NAN), f32::INFINITY);
        assert!(CrushCoefficients::derive(0.0, 100.0, 100.0).is_pass_through());
    }

    #[test]
    fn test_step_positive_finite_for_positive_bits() {
        for bits in [0.01, 0.5, 1.0, 8.0, 16.0, 24.0, 32.0] {
            let s = quantization_step(bits);
            assert!(s > 0.0 && s.is_finite(), "bits={bits} step={s}");
        }
    }

    #[test]
    fn test_step_underflow_pass_through() {
        assert_eq!(quantization_step(200.0), f32::INFINITY);
        assert_eq!(quantization_step(f32::INFINITY), f32::INFINITY);
        assert!(CrushCoefficients::derive(1000.0, 100.0, 100.0).is_pass_through());
        assert!(quantization_step(120.0).is_normal());
    }

    #[test]
    fn test_max_level() {
        assert_eq!(max_level(1.0), 1.0);
        assert_eq!(max_level(8.0), 255.0);
        assert_eq!(max_level(16.0), 65535.0);
        assert_eq!(max_level(0.0), 0.0);
        assert_eq!(max_level(-1.0), 0.0);
    }

    #[test]
    fn test_ratio_equal_rates_is_exactly_one() {
        assert_eq!(decimation_ratio(44100.0, 44100.0), 1.0);
        assert_eq!(decimation_ratio(48000.0, 48000.0), 1.0);
    }

    #[test]
    fn test_ratio_above_native_is_one() {
        assert_eq!(decimation_ratio(96000.0, 44100.0), 1.0);
        assert_eq!(decimation_ratio(f32::INFINITY, 44100.0), 1.0);
    }

    #[test]
    fn test_ratio_below_native() {
        assert_eq!(decimation_ratio(22050.0, 44100.0), 0.5);
        assert!((decimation_ratio(8000.0, 48000.0) - 1.0 / 6.0).abs() < 1e-7);
    }

    #[test]
    fn test_ratio_non_positive_target_clamps() {
        assert_eq!(decimation_ratio(0.0, 44100.0), MIN_RATIO);
        assert_eq!(decimation_ratio(-10.0, 44100.0), MIN_RATIO);
        assert_eq!(decimation_ratio(f32::NAN, 44100.0), MIN_RATIO);
        assert_eq!(decimation_ratio(1e-30, 44100.0), MIN_RATIO);
    }

    #[test]
    fn test_ratio_degenerate_native_rate() {
        assert_eq!(decimation_ratio(100.0, 0.0), 1.0);
        assert_eq!(decimation_ratio(100.0, f32::NAN), 1.0);
    }

    #[test]
    fn test_ratio_always_in_unit_interval() {
        for target in [-1.0, 0.0, 1.0, 100.0, 22050.0, 44100.0, 1e9] {
            let r = decimation_ratio(target, 44100.0);
            assert!(r > 0.0 && r <= 1.0, "target={target} ratio={r}");
        }
    }

    #[test]
    fn test_transparent_default() {
        let c = CrushCoefficients::default();
        assert!(c.is_pass_through());
        assert_eq!(c.ratio, 1.0);
    }
}
