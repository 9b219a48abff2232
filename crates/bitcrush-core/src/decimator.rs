//! Zero-order-hold decimator.
//!
//! # Theory
//!
//! Sample-rate reduction without a resampler: a fractional accumulator
//! advances by `ratio` (target rate / native rate) every native sample, and
//! each time it completes a full unit a new input sample is latched,
//! quantized, and held. Between latches the held value is repeated. The
//! output therefore stays at the native rate but only changes `ratio` times
//! per sample on average, producing the staircase waveform and aliasing that
//! define the bitcrushed sound.
//!
//! The accumulator runs as a countdown: `count <= 0` means a latch is due.
//! Starting from `count = 0` the very first sample of a stream is latched,
//! so with `ratio = 0.5` the output is `[x0, x0, x2, x2, x4, ...]`.
//!
//! Fractional ratios keep their phase: with `ratio = 0.3` latches fall every
//! 3 or 4 samples, averaging `1 / 0.3` samples per held value.
//!
//! State is carried across calls. Only [`Decimator::reset`] returns the
//! accumulator and held value to their initial state.

use crate::coefficients::CrushCoefficients;
use crate::quantize::quantize;

/// Sample-and-hold state for one channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decimator {
    /// Countdown accumulator. A latch is due when it reaches zero or below.
    count: f32,
    /// Most recently latched (quantized) output sample.
    last_out: f32,
}

impl Decimator {
    /// Create a decimator in its initial state (`count = 0`, `last_out = 0`).
    pub const fn new() -> Self {
        Self {
            count: 0.0,
            last_out: 0.0,
        }
    }

    /// Advance by one native sample.
    ///
    /// Latches `quantize(input, coeffs.step)` when the accumulator is due,
    /// otherwise repeats the held value.
    #[inline]
    pub fn tick(&mut self, input: f32, coeffs: &CrushCoefficients) -> f32 {
        if self.count <= 0.0 {
            self.count += 1.0;
            self.last_out = quantize(input, coeffs.step);
        }
        self.count -= coeffs.ratio;
        self.last_out
    }

    /// Run [`tick`](Self::tick) over a block, strictly in order.
    ///
    /// Processes `min(input.len(), output.len())` samples.
    #[inline]
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32], coeffs: &CrushCoefficients) {
        debug_assert_eq!(input.len(), output.len());
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.tick(*inp, coeffs);
        }
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.count = 0.0;
        self.last_out = 0.0;
    }

    /// Current accumulator value.
    pub fn count(&self) -> f32 {
        self.count
    }

    /// Currently held output sample.
    pub fn last_out(&self) -> f32 {
        self.last_out
    }
}
