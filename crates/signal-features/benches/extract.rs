//! Feature extraction benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signal_features::{extract_batch, FeatureExtractor};

fn sine(freq_hz: f64, sample_rate: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * std::f64::consts::PI * freq_hz * i as f64 / sample_rate).sin())
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let segment = sine(12.0, 500.0, 500);
    let mut extractor = FeatureExtractor::new(500.0);

    c.bench_function("extract_single_segment", |b| {
        b.iter(|| extractor.extract(black_box(&segment)))
    });

    let segments: Vec<Vec<f64>> = (0..100).map(|k| sine(1.0 + k as f64 * 0.4, 500.0, 500)).collect();
    c.bench_function("extract_batch_100x500", |b| {
        b.iter(|| extract_batch(black_box(&segments), 500.0))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
