//! Criterion benchmarks for bitcrush-core primitives
//!
//! Run with: cargo bench -p bitcrush-core
#![allow(missing_docs)]

use bitcrush_core::{CrushCoefficients, Decimator, quantize};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_quantize(c: &mut Criterion) {
    let step = CrushCoefficients::derive(8.0, SAMPLE_RATE, SAMPLE_RATE).step;
    c.bench_function("quantize_8bit", |b| {
        b.iter(|| quantize(black_box(0.123_45), black_box(step)))
    });
}

fn bench_coefficients(c: &mut Criterion) {
    c.bench_function("derive_coefficients", |b| {
        b.iter(|| CrushCoefficients::derive(black_box(7.5), black_box(11025.0), SAMPLE_RATE))
    });
}

fn bench_decimator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decimator");
    let coeffs = CrushCoefficients::derive(8.0, 11025.0, SAMPLE_RATE);

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut decimator = Decimator::new();
                let mut output = vec![0.0; block_size];
                b.iter(|| {
                    decimator.process_block(black_box(&input), &mut output, &coeffs);
                    black_box(output[0])
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_quantize, bench_coefficients, bench_decimator);
criterion_main!(benches);
