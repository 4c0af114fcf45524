//! Pipeline integration test over a synthetic labeled recording batch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seizure_pipeline::{run, PipelineConfig, RecordingBatch};

const SAMPLING_RATE: f64 = 500.0;
const SEGMENT_LEN: usize = 500;

fn noise_segment(rng: &mut StdRng, amplitude: f64) -> Vec<f64> {
    (0..SEGMENT_LEN)
        .map(|_| amplitude * rng.gen_range(-1.0..1.0))
        .collect()
}

fn burst_segment(rng: &mut StdRng, sine_amplitude: f64, freq_hz: f64) -> Vec<f64> {
    (0..SEGMENT_LEN)
        .map(|i| {
            let t = i as f64 / SAMPLING_RATE;
            sine_amplitude * (2.0 * std::f64::consts::PI * freq_hz * t).sin()
                + rng.gen_range(-1.0..1.0)
        })
        .collect()
}

/// 100 segments: 60 seizure (sinusoidal bursts of graded amplitude; the
/// weakest third are pure noise, indistinguishable from baseline) and
/// 40 baseline (low-amplitude noise).
fn synthetic_batch() -> RecordingBatch {
    let mut rng = StdRng::seed_from_u64(7);

    let seizure: Vec<Vec<f64>> = (0..60)
        .map(|k| {
            if k < 20 {
                // Ambiguous events: no burst at all
                noise_segment(&mut rng, 1.0)
            } else {
                let amplitude = 2.0 + 6.0 * (k - 20) as f64 / 39.0;
                burst_segment(&mut rng, amplitude, 10.0)
            }
        })
        .collect();

    let baseline: Vec<Vec<f64>> = (0..40).map(|_| noise_segment(&mut rng, 1.0)).collect();

    RecordingBatch {
        baseline,
        seizure,
        sampling_rate: SAMPLING_RATE,
    }
}

#[test]
fn full_pipeline_on_synthetic_recordings() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let batch = synthetic_batch();
    let result = run(&batch, &PipelineConfig::default()).unwrap();

    // Matrix shape and pairing
    assert_eq!(result.features.len(), 100);
    assert_eq!(result.labels.len(), 100);
    assert_eq!(result.labels.iter().filter(|&&l| l == 1).count(), 60);

    // Held-out protocol: 20 test rows, stratified 12 seizure / 8 baseline
    let report = &result.report;
    assert_eq!(report.n_test, 20);
    assert_eq!(report.n_train, 80);
    assert_eq!(report.y_test.iter().filter(|&&l| l == 1).count(), 12);
    assert_eq!(report.y_test.iter().filter(|&&l| l == 0).count(), 8);

    // Classes overlap by construction, so the classifier can neither
    // fail completely nor score perfectly.
    assert!(report.accuracy > 0.0);
    assert!(report.accuracy < 1.0);

    // Confusion matrix consistency
    let diagonal = report.confusion_matrix[0][0] + report.confusion_matrix[1][1];
    assert_eq!(report.accuracy, diagonal as f64 / report.n_test as f64);
    let total: usize = report
        .confusion_matrix
        .iter()
        .flat_map(|row| row.iter())
        .sum();
    assert_eq!(total, report.n_test);

    // Strong bursts push the seizure class's variance and alpha power up
    let [baseline_profile, seizure_profile] = &result.profiles;
    assert_eq!(baseline_profile.count, 40);
    assert_eq!(seizure_profile.count, 60);
    assert!(seizure_profile.feature_means[1] > baseline_profile.feature_means[1]);
    assert!(seizure_profile.feature_means[4] > baseline_profile.feature_means[4]);
}

#[test]
fn pipeline_is_reproducible() {
    let batch = synthetic_batch();
    let config = PipelineConfig::default();

    let a = run(&batch, &config).unwrap();
    let b = run(&batch, &config).unwrap();

    assert_eq!(a.report.accuracy, b.report.accuracy);
    assert_eq!(a.report.confusion_matrix, b.report.confusion_matrix);
    assert_eq!(a.report.y_test, b.report.y_test);
    assert_eq!(a.report.y_pred, b.report.y_pred);
    assert_eq!(a.features, b.features);
}

#[test]
fn report_round_trips_through_json() {
    let batch = synthetic_batch();
    let result = run(&batch, &PipelineConfig::default()).unwrap();

    let json = serde_json::to_string(&result.report).unwrap();
    let parsed: svm_classifier::ClassificationReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.accuracy, result.report.accuracy);
    assert_eq!(parsed.confusion_matrix, result.report.confusion_matrix);
    assert_eq!(parsed.y_pred, result.report.y_pred);
    assert_eq!(parsed.per_class.len(), 2);
}
