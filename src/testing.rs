//! Seeded synthetic datasets for tests and benchmarks.

use rand::prelude::*;

use crate::dataset::Dataset;

/// Generate a regression dataset whose target is a linear model of the
/// features plus uniform noise.
///
/// Features are uniform in `[0, 1]`; true weights are uniform in `[-1, 1]`
/// and the bias in `[-0.25, 0.25]`. Returns `(dataset, weights, bias)` so
/// tests can compare recovered coefficients against the ground truth.
pub fn synthetic_linear_dataset(
    n_samples: usize,
    n_features: usize,
    seed: u64,
    noise_amplitude: f32,
) -> (Dataset, Vec<f32>, f32) {
    assert!(n_samples > 0 && n_features > 0);
    let mut rng = StdRng::seed_from_u64(seed);

    let weights: Vec<f32> = (0..n_features).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect();
    let bias: f32 = rng.gen::<f32>() * 0.5 - 0.25;

    let mut rows = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let mut row: Vec<f32> = (0..n_features).map(|_| rng.gen::<f32>()).collect();
        let mut y = bias;
        for (w, x) in weights.iter().zip(&row) {
            y += w * x;
        }
        if noise_amplitude > 0.0 {
            y += (rng.gen::<f32>() * 2.0 - 1.0) * noise_amplitude;
        }
        row.push(y);
        rows.push(row);
    }

    let dataset = Dataset::from_rows(&rows).expect("generated rows are rectangular");
    (dataset, weights, bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_and_reproducibility() {
        let (a, weights, _) = synthetic_linear_dataset(20, 3, 99, 0.1);
        let (b, _, _) = synthetic_linear_dataset(20, 3, 99, 0.1);

        assert_eq!(a.n_samples(), 20);
        assert_eq!(a.n_features(), 3);
        assert_eq!(weights.len(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn noiseless_targets_are_exactly_linear() {
        let (ds, weights, bias) = synthetic_linear_dataset(10, 2, 5, 0.0);

        for sample in 0..ds.n_samples() {
            let row = ds.row(sample);
            let expected: f32 =
                bias + weights.iter().zip(row.iter()).map(|(w, x)| w * x).sum::<f32>();
            assert!((ds.target(sample) - expected).abs() < 1e-6);
        }
    }
}
