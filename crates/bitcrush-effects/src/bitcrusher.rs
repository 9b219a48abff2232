//! Bitcrusher effect: bit depth quantization and sample rate reduction.
//!
//! # Theory
//!
//! Bitcrushing intentionally degrades audio fidelity to produce lo-fi
//! digital artifacts. Two independent mechanisms drive the effect:
//!
//! ## Bit Depth Reduction (Quantization)
//!
//! With B bits the amplitude axis is divided into cells of width
//! `step = 0.5^B`. Each latched sample is folded onto that grid by
//! [`bitcrush_core::quantize`]. The resulting error is a broadband noise
//! floor roughly `6·B` dB below full scale.
//!
//! Bit depth is real-valued: fractional depths give grids between the
//! power-of-two sizes, which is useful for smooth automation.
//!
//! ## Sample Rate Reduction (Zero-Order Hold)
//!
//! A target sample rate below the native rate makes the
//! [`Decimator`](bitcrush_core::Decimator) hold each latched sample for
//! `native / target` native samples on average. The held staircase aliases
//! high frequencies back into the audible band.
//!
//! ## Hold Continuity Across Blocks
//!
//! By default the hold accumulator runs continuously for the lifetime of
//! the instance, so the decimation period is independent of the host's
//! block size. [`HoldMode::ResetEachBlock`] restarts the hold at the start
//! of every block, reproducing hosts and legacy plugins that kept the
//! accumulator in call-local storage.

use bitcrush_core::{
    CrushCoefficients, Decimator, Effect, ParamDescriptor, ParamFlags, ParamId, ParamScale,
    ParamUnit, ParameterInfo,
};

/// Bit depth control: 0–32 bits, integer-hinted, default 16.
///
/// Values at or below zero disable quantization.
pub const BIT_DEPTH_PARAM: ParamDescriptor =
    ParamDescriptor::custom("Resolution (bits)", "Bits", 0.0, 32.0, 16.0)
        .with_unit(ParamUnit::Bits)
        .with_step(1.0)
        .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED))
        .with_id(ParamId(1700), "crush_bits");

/// Target sample rate control, expressed as a fraction of the native rate:
/// (0, 1] × native, logarithmic, default half the native rate.
pub const TARGET_RATE_PARAM: ParamDescriptor =
    ParamDescriptor::custom("Frequency", "Freq", 0.0, 1.0, 0.5)
        .with_unit(ParamUnit::Hertz)
        .with_step(0.001)
        .with_scale(ParamScale::Logarithmic)
        .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::SAMPLE_RATE))
        .with_id(ParamId(1701), "crush_rate");

/// Hold continuity selector (0 = continuous, 1 = reset each block).
///
/// Hidden: configuration, not a host port.
pub const HOLD_MODE_PARAM: ParamDescriptor =
    ParamDescriptor::custom("Hold Mode", "Hold", 0.0, 1.0, 0.0)
        .with_step(1.0)
        .with_flags(ParamFlags::STEPPED.union(ParamFlags::HIDDEN))
        .with_id(ParamId(1702), "crush_hold");

/// Parameter index of [`BIT_DEPTH_PARAM`].
pub const PARAM_BIT_DEPTH: usize = 0;
/// Parameter index of [`TARGET_RATE_PARAM`].
pub const PARAM_TARGET_RATE: usize = 1;
/// Parameter index of [`HOLD_MODE_PARAM`].
pub const PARAM_HOLD_MODE: usize = 2;

/// When the decimator's hold state is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoldMode {
    /// State persists across blocks; only [`Effect::reset`] clears it.
    #[default]
    Continuous,
    /// State is cleared at the start of every block.
    ResetEachBlock,
}

impl HoldMode {
    /// Stable lowercase name used by presets and the command line.
    pub const fn name(self) -> &'static str {
        match self {
            HoldMode::Continuous => "continuous",
            HoldMode::ResetEachBlock => "reset-each-block",
        }
    }

    /// Parse a name produced by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "continuous" => Some(HoldMode::Continuous),
            "reset-each-block" => Some(HoldMode::ResetEachBlock),
            _ => None,
        }
    }

    /// Parameter value for [`HOLD_MODE_PARAM`].
    pub const fn to_param(self) -> f32 {
        match self {
            HoldMode::Continuous => 0.0,
            HoldMode::ResetEachBlock => 1.0,
        }
    }

    /// Interpret a [`HOLD_MODE_PARAM`] value; anything at or above 0.5
    /// selects [`HoldMode::ResetEachBlock`].
    pub fn from_param(value: f32) -> Self {
        if value >= 0.5 {
            HoldMode::ResetEachBlock
        } else {
            HoldMode::Continuous
        }
    }
}

/// Mono bitcrusher combining bit depth reduction and sample rate reduction.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Resolution (bits) | 0–32 | 16 |
/// | 1 | Frequency | 0–native Hz | native / 2 |
/// | 2 | Hold Mode (hidden) | 0–1 | 0 |
///
/// Ranges are advisory. `set_param` applies values as given; out-of-range
/// controls are sanitized when coefficients are derived.
///
/// # Example
///
/// ```rust
/// use bitcrush_effects::Bitcrusher;
/// use bitcrush_core::Effect;
///
/// let mut crusher = Bitcrusher::new(44100.0);
/// crusher.set_bit_depth(4.0);
/// crusher.set_target_rate(11025.0);
///
/// let mut out = [0.0; 8];
/// crusher.process_block(&[0.5; 8], &mut out);
/// assert!(out.iter().all(|s| s.is_finite()));
/// ```
#[derive(Debug, Clone)]
pub struct Bitcrusher {
    /// Native sample rate, fixed at construction.
    native_rate: f32,
    bit_depth: f32,
    target_rate: f32,
    hold_mode: HoldMode,
    /// Derived from the three fields above; refreshed by every setter.
    coeffs: CrushCoefficients,
    decimator: Decimator,
}

impl Bitcrusher {
    /// Create a new `Bitcrusher` at the given native sample rate, with
    /// default controls and a fresh hold state.
    pub fn new(native_rate: f32) -> Self {
        let bit_depth = BIT_DEPTH_PARAM.default;
        let target_rate = TARGET_RATE_PARAM.resolve(native_rate).default;
        Self {
            native_rate,
            bit_depth,
            target_rate,
            hold_mode: HoldMode::default(),
            coeffs: CrushCoefficients::derive(bit_depth, target_rate, native_rate),
            decimator: Decimator::new(),
        }
    }

    /// Native sample rate given at construction.
    pub fn native_rate(&self) -> f32 {
        self.native_rate
    }

    /// Set the bit depth. Non-positive values disable quantization.
    pub fn set_bit_depth(&mut self, bits: f32) {
        self.bit_depth = bits;
        self.update_coefficients();
    }

    /// Current bit depth control value.
    #[must_use]
    pub fn bit_depth(&self) -> f32 {
        self.bit_depth
    }

    /// Set the target sample rate in Hz. Rates at or above the native rate
    /// disable decimation.
    pub fn set_target_rate(&mut self, hz: f32) {
        self.target_rate = hz;
        self.update_coefficients();
    }

    /// Current target sample rate control value.
    #[must_use]
    pub fn target_rate(&self) -> f32 {
        self.target_rate
    }

    /// Select when hold state is cleared.
    pub fn set_hold_mode(&mut self, mode: HoldMode) {
        self.hold_mode = mode;
    }

    /// Current hold mode.
    #[must_use]
    pub fn hold_mode(&self) -> HoldMode {
        self.hold_mode
    }

    /// Coefficients in effect for the next block.
    #[must_use]
    pub fn coefficients(&self) -> CrushCoefficients {
        self.coeffs
    }

    /// Read-only view of the hold state.
    #[must_use]
    pub fn decimator(&self) -> &Decimator {
        &self.decimator
    }

    fn update_coefficients(&mut self) {
        self.coeffs = CrushCoefficients::derive(self.bit_depth, self.target_rate, self.native_rate);
    }

    #[inline]
    fn begin_block(&mut self) {
        if self.hold_mode == HoldMode::ResetEachBlock {
            self.decimator.reset();
        }
    }
}

impl Effect for Bitcrusher {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.decimator.tick(input, &self.coeffs)
    }

    /// Process one block in order.
    ///
    /// In [`HoldMode::ResetEachBlock`] the hold state is cleared first.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        self.begin_block();
        self.decimator.process_block(input, output, &self.coeffs);
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        self.begin_block();
        for sample in buffer.iter_mut() {
            *sample = self.decimator.tick(*sample, &self.coeffs);
        }
    }

    /// Clear the held sample and the accumulator. Controls are kept.
    fn reset(&mut self) {
        self.decimator.reset();
    }
}

impl ParameterInfo for Bitcrusher {
    fn param_count(&self) -> usize {
        3
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            PARAM_BIT_DEPTH => Some(BIT_DEPTH_PARAM),
            PARAM_TARGET_RATE => Some(TARGET_RATE_PARAM.resolve(self.native_rate)),
            PARAM_HOLD_MODE => Some(HOLD_MODE_PARAM),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            PARAM_BIT_DEPTH => self.bit_depth,
            PARAM_TARGET_RATE => self.target_rate,
            PARAM_HOLD_MODE => self.hold_mode.to_param(),
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            PARAM_BIT_DEPTH => self.set_bit_depth(value),
            PARAM_TARGET_RATE => self.set_target_rate(value),
            PARAM_HOLD_MODE => self.set_hold_mode(HoldMode::from_param(value)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcrush_core::quantize;

    fn ramp(n: usize) -> Vec<f32> {
        (0..n).map(|i| -1.0 + 2.0 * i as f32 / (n - 1) as f32).collect()
    }

    #[test]
    fn test_default_params() {
        let crusher = Bitcrusher::new(44100.0);
        assert_eq!(crusher.param_count(), 3);

        let bits = crusher.param_info(PARAM_BIT_DEPTH).unwrap();
        assert_eq!(bits.name, "Resolution (bits)");
        assert_eq!(bits.default, 16.0);
        assert!(bits.is_stepped());

        let rate = crusher.param_info(PARAM_TARGET_RATE).unwrap();
        assert_eq!(rate.name, "Frequency");
        assert_eq!(rate.max, 44100.0);
        assert_eq!(rate.default, 22050.0);
        assert!(!rate.flags.contains(ParamFlags::SAMPLE_RATE));

        let hold = crusher.param_info(PARAM_HOLD_MODE).unwrap();
        assert!(hold.flags.contains(ParamFlags::HIDDEN));

        assert!(crusher.param_info(3).is_none());
        assert_eq!(crusher.bit_depth(), 16.0);
        assert_eq!(crusher.target_rate(), 22050.0);
        assert_eq!(crusher.hold_mode(), HoldMode::Continuous);
    }

    #[test]
    fn test_setters_refresh_coefficients() {
        let mut crusher = Bitcrusher::new(48000.0);
        crusher.set_target_rate(12000.0);
        assert_eq!(crusher.coefficients().ratio, 0.25);
        crusher.set_bit_depth(8.0);
        assert_eq!(crusher.coefficients().max_level, 255.0);
        crusher.set_target_rate(48000.0);
        assert_eq!(crusher.coefficients().ratio, 1.0);
    }

    #[test]
    fn test_out_of_range_controls_are_not_clamped() {
        let mut crusher = Bitcrusher::new(48000.0);
        crusher.set_param(PARAM_BIT_DEPTH, 40.0);
        crusher.set_param(PARAM_TARGET_RATE, -5.0);
        assert_eq!(crusher.get_param(PARAM_BIT_DEPTH), 40.0);
        assert_eq!(crusher.get_param(PARAM_TARGET_RATE), -5.0);
        assert_eq!(crusher.coefficients().ratio, bitcrush_core::MIN_RATIO);
    }

    #[test]
    fn test_zero_bits_passes_through() {
        let mut crusher = Bitcrusher::new(48000.0);
        crusher.set_bit_depth(0.0);
        crusher.set_target_rate(48000.0);
        let input = ramp(16);
        let mut out = vec![0.0; 16];
        crusher.process_block(&input, &mut out);
        assert_eq!(input, out);
    }

    #[test]
    fn test_unity_ratio_equals_quantization() {
        let mut crusher = Bitcrusher::new(48000.0);
        crusher.set_bit_depth(5.0);
        crusher.set_target_rate(96000.0);
        let step = crusher.coefficients().step;
        let input = ramp(64);
        let mut out = vec![0.0; 64];
        crusher.process_block(&input, &mut out);
        for (x, y) in input.iter().zip(&out) {
            assert_eq!(*y, quantize(*x, step));
        }
    }

    #[test]
    fn test_single_sample_matches_block() {
        let mut a = Bitcrusher::new(44100.0);
        let mut b = Bitcrusher::new(44100.0);
        for c in [&mut a, &mut b] {
            c.set_bit_depth(6.0);
            c.set_target_rate(10000.0);
        }
        let input = ramp(50);
        let mut block = vec![0.0; 50];
        a.process_block(&input, &mut block);
        let single: Vec<f32> = input.iter().map(|&x| b.process(x)).collect();
        assert_eq!(block, single);
    }

    #[test]
    fn test_continuous_mode_ignores_block_boundaries() {
        let mut whole = Bitcrusher::new(44100.0);
        let mut split = Bitcrusher::new(44100.0);
        for c in [&mut whole, &mut split] {
            c.set_bit_depth(12.0);
            c.set_target_rate(44100.0 / 3.0);
        }
        let input = ramp(40);
        let mut expected = vec![0.0; 40];
        whole.process_block(&input, &mut expected);

        let mut got = vec![0.0; 40];
        for (i, o) in input.chunks(4).zip(got.chunks_mut(4)) {
            split.process_block(i, o);
        }
        assert_eq!(expected, got);
    }

    #[test]
    fn test_reset_each_block_restarts_hold() {
        let mut crusher = Bitcrusher::new(44100.0);
        crusher.set_bit_depth(24.0);
        crusher.set_target_rate(44100.0 / 4.0);
        crusher.set_hold_mode(HoldMode::ResetEachBlock);

        // Block of 3 with a period of 4: every block latches its first sample.
        let input = ramp(9);
        let mut out = vec![0.0; 9];
        for (i, o) in input.chunks(3).zip(out.chunks_mut(3)) {
            crusher.process_block(i, o);
        }
        let step = crusher.coefficients().step;
        for k in 0..3 {
            let latched = quantize(input[3 * k], step);
            assert_eq!(&out[3 * k..3 * k + 3], &[latched; 3]);
        }
    }

    #[test]
    fn test_reset_each_block_inplace() {
        let mut crusher = Bitcrusher::new(44100.0);
        crusher.set_bit_depth(0.0);
        crusher.set_target_rate(44100.0 / 4.0);
        crusher.set_param(PARAM_HOLD_MODE, 1.0);

        let mut first = [0.1, 0.2];
        crusher.process_block_inplace(&mut first);
        let mut second = [0.3, 0.4];
        crusher.process_block_inplace(&mut second);
        assert_eq!(first, [0.1, 0.1]);
        assert_eq!(second, [0.3, 0.3]);
    }

    #[test]
    fn test_reset_clears_hold() {
        let mut crusher = Bitcrusher::new(44100.0);
        crusher.set_target_rate(1000.0);
        for x in ramp(20) {
            crusher.process(x);
        }
        assert!(crusher.decimator().last_out() != 0.0);
        crusher.reset();
        assert_eq!(crusher.decimator(), &Decimator::new());
        assert_eq!(crusher.target_rate(), 1000.0);
    }

    #[test]
    fn test_hold_mode_names_and_params() {
        for mode in [HoldMode::Continuous, HoldMode::ResetEachBlock] {
            assert_eq!(HoldMode::from_name(mode.name()), Some(mode));
            assert_eq!(HoldMode::from_param(mode.to_param()), mode);
        }
        assert_eq!(HoldMode::from_name("sometimes"), None);
    }

    #[test]
    fn test_param_set_get() {
        let mut crusher = Bitcrusher::new(48000.0);
        crusher.set_param(PARAM_BIT_DEPTH, 4.0);
        assert_eq!(crusher.get_param(PARAM_BIT_DEPTH), 4.0);
        crusher.set_param(PARAM_TARGET_RATE, 8000.0);
        assert_eq!(crusher.get_param(PARAM_TARGET_RATE), 8000.0);
        crusher.set_param(PARAM_HOLD_MODE, 1.0);
        assert_eq!(crusher.hold_mode(), HoldMode::ResetEachBlock);
        assert_eq!(crusher.get_param(9), 0.0);
        assert_eq!(crusher.find_param_by_name("bits"), Some(PARAM_BIT_DEPTH));
        assert_eq!(crusher.find_param_by_name("crush_rate"), Some(PARAM_TARGET_RATE));
    }
}
