//! Property-based tests for bitcrush-core primitives.
//!
//! Uses proptest to check coefficient invariants, quantizer error bounds and
//! symmetry, and decimator block-split independence.

use bitcrush_core::{CrushCoefficients, Decimator, MIN_RATIO, decimation_ratio, quantize};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The decimation ratio always lies in (0, 1], whatever the controls.
    #[test]
    fn ratio_in_unit_interval(
        target in -1.0e6f32..1.0e6f32,
        native in 1.0f32..384_000.0f32,
    ) {
        let r = decimation_ratio(target, native);
        prop_assert!(r >= MIN_RATIO && r <= 1.0, "target={} native={} ratio={}", target, native, r);
        if target >= native {
            prop_assert_eq!(r, 1.0);
        }
    }

    /// For positive bit depths the step is positive and finite, and the
    /// quantization error never exceeds one step.
    #[test]
    fn quantize_error_within_one_step(
        x in -1.0f32..=1.0f32,
        bits in 0.5f32..=32.0f32,
    ) {
        let c = CrushCoefficients::derive(bits, 1.0, 1.0);
        prop_assert!(c.step > 0.0 && c.step.is_finite());
        let y = quantize(x, c.step);
        prop_assert!(y.is_finite());
        prop_assert!((y - x).abs() <= c.step * 1.0001, "x={} y={} step={}", x, y, c.step);
    }

    /// The grid is mirror-symmetric around zero.
    #[test]
    fn quantize_is_odd(
        x in 1.0e-6f32..=1.0f32,
        bits in 0.5f32..=24.0f32,
    ) {
        let step = CrushCoefficients::derive(bits, 1.0, 1.0).step;
        prop_assert_eq!(quantize(-x, step), -quantize(x, step));
    }

    /// Splitting a stream into blocks of any size does not change the output.
    #[test]
    fn decimator_block_split_invariant(
        input in prop::collection::vec(-1.0f32..=1.0f32, 1..256),
        ratio in 0.01f32..=1.0f32,
        block in 1usize..64,
    ) {
        let c = CrushCoefficients { ratio, ..CrushCoefficients::derive(6.0, 1.0, 1.0) };

        let mut whole = Decimator::new();
        let mut expected = vec![0.0; input.len()];
        whole.process_block(&input, &mut expected, &c);

        let mut split = Decimator::new();
        let mut got = vec![0.0; input.len()];
        for (i, o) in input.chunks(block).zip(got.chunks_mut(block)) {
            split.process_block(i, o, &c);
        }
        prop_assert_eq!(expected, got);
    }

    /// Every output sample is either a fresh quantization of the current
    /// input or a repeat of the previous output.
    #[test]
    fn decimator_outputs_latch_or_hold(
        input in prop::collection::vec(-1.0f32..=1.0f32, 2..128),
        ratio in 0.05f32..=1.0f32,
        bits in 1.0f32..=16.0f32,
    ) {
        let c = CrushCoefficients { ratio, ..CrushCoefficients::derive(bits, 1.0, 1.0) };
        let mut d = Decimator::new();
        let mut prev = 0.0;
        for &x in &input {
            let y = d.tick(x, &c);
            prop_assert!(y == prev || y == quantize(x, c.step));
            prev = y;
        }
    }
}
