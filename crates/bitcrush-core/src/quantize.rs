//! Sign-aware amplitude quantizer.
//!
//! # Theory
//!
//! The quantizer folds a sample onto a grid of spacing `step`. The sample is
//! biased by half a step towards its own sign, divided by the step, and the
//! fractional part of that quotient (taken with the quotient's sign, as C's
//! `modf` does) is the quantization error in step units:
//!
//! ```text
//! sign  = x < 0 ? -1 : 1
//! q     = (x + sign · step/2) / step
//! delta = frac(q) · step
//! y     = x - delta
//! ```
//!
//! Because the bias follows the sign, the grid is mirror-symmetric around
//! zero: `quantize(-x) == -quantize(x)` for every `x != 0`. The output levels
//! sit at odd multiples of `step/2`, so a signal hovering around zero toggles
//! between `±step/2` instead of collapsing onto a single level.
//!
//! The error is bounded by one step: `|y - x| < step`.

use libm::truncf;

/// Quantize `x` onto the grid defined by `step`.
///
/// A `step` that is zero, subnormal, infinite, or NaN disables quantization
/// and returns `x` unchanged.
///
/// # Example
///
/// ```rust
/// use bitcrush_core::quantize;
///
/// // step 0.5: levels at ±0.25, ±0.75, ...
/// assert!((quantize(0.6, 0.5) - 0.25).abs() < 1e-6);
/// assert!((quantize(-0.9, 0.5) + 0.75).abs() < 1e-6);
/// assert_eq!(quantize(0.6, f32::INFINITY), 0.6);
/// ```
#[inline]
pub fn quantize(x: f32, step: f32) -> f32 {
    if !step.is_normal() {
        return x;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let q = (x + sign * step * 0.5) / step;
    let delta = (q - truncf(q)) * step;
    x - delta
}
