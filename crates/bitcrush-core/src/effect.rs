//! Core Effect trait.
//!
//! The [`Effect`] trait is the processing surface every bitcrush effect
//! exposes: single-sample processing for per-sample callers and block
//! processing for hosts that hand over a buffer at a time.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. Multi-channel use is
//!   one instance per channel; instances share no state.
//!
//! - **Object-safe**: The trait can be used as `dyn Effect`, which is how the
//!   plugin registry stores instantiated effects.
//!
//! - **No allocations**: All methods are called from real-time audio
//!   contexts and must not allocate, block, or log.
//!
//! - **Fixed sample rate**: The native sample rate is given at construction
//!   and never changes for the lifetime of an effect.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use bitcrush_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
///
/// let mut gain = Gain { gain: 0.5 };
/// let mut out = [0.0; 2];
/// gain.process_block(&[1.0, -1.0], &mut out);
/// assert_eq!(out, [0.5, -0.5]);
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For effects with internal state this advances the state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample, in order.
    /// Effects with per-block work (coefficient derivation, state policy)
    /// override this.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Reset internal state.
    ///
    /// Clears all running state without changing parameters. Hosts call this
    /// when an instance is activated.
    fn reset(&mut self);
}
