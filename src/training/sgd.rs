//! Stochastic gradient descent for linear regression.
//!
//! Fits a [`LinearModel`] by online (per-row) gradient updates on the
//! squared error, visiting training rows in dataset order for a fixed
//! number of epochs. The recurrence is deterministic: identical inputs
//! (including row order) reproduce the coefficient vector bit for bit.

use ndarray::ArrayView2;

use crate::dataset::Dataset;
use crate::repr::linear::LinearModel;

use super::eval::Algorithm;
use super::logger::{TrainingLogger, Verbosity};

// ============================================================================
// SgdParams
// ============================================================================

/// Parameters for SGD training.
#[derive(Debug, Clone)]
pub struct SgdParams {
    /// Step size for each gradient update. Must be positive and finite.
    ///
    /// Too large a rate makes the coefficients diverge; divergence is not
    /// detected here and surfaces as non-finite coefficients and scores.
    pub learning_rate: f32,

    /// Number of full passes over the training rows.
    pub n_epochs: u32,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            n_epochs: 50,
            verbosity: Verbosity::default(),
        }
    }
}

// ============================================================================
// SgdTrainer
// ============================================================================

/// Linear regression trainer using stochastic gradient descent.
#[derive(Debug, Clone, Default)]
pub struct SgdTrainer {
    params: SgdParams,
}

impl SgdTrainer {
    /// Create a trainer with the given parameters.
    ///
    /// # Panics
    ///
    /// Panics if `learning_rate` is not positive and finite.
    pub fn new(params: SgdParams) -> Self {
        assert!(
            params.learning_rate > 0.0 && params.learning_rate.is_finite(),
            "learning_rate must be positive and finite, got {}",
            params.learning_rate
        );
        Self { params }
    }

    /// Fit a linear model to `train`.
    ///
    /// Coefficients start at zero; with `n_epochs == 0` the returned model
    /// is the zero model. For each epoch, each row in order:
    ///
    /// ```text
    /// error      = predict(row) - target
    /// bias      -= learning_rate * error
    /// weight[i] -= learning_rate * error * row[i]
    /// ```
    ///
    /// The training set is not mutated. Divergence (non-finite
    /// coefficients) is not an error: values propagate and a warning is
    /// logged once.
    pub fn train(&self, train: &Dataset) -> LinearModel {
        let logger = TrainingLogger::new(self.params.verbosity);
        let l_rate = self.params.learning_rate;
        let mut model = LinearModel::zeros(train.n_features());

        logger.start_training(self.params.n_epochs);
        let mut warned = false;
        for epoch in 0..self.params.n_epochs {
            let mut sum_sq_error = 0.0f64;
            for sample in 0..train.n_samples() {
                let row = train.row(sample);
                let error = model.predict_row(row.iter()) - train.target(sample);

                model.add_bias(-l_rate * error);
                for (feature, &x) in row.iter().enumerate() {
                    model.add_weight(feature, -l_rate * error * x);
                }

                sum_sq_error += (error as f64) * (error as f64);
            }

            let mse = sum_sq_error / train.n_samples() as f64;
            logger.log_epoch(epoch, mse);
            if !mse.is_finite() && !warned {
                logger.warn_non_finite(epoch);
                warned = true;
            }
        }
        logger.finish_training();

        model
    }
}

// ============================================================================
// SgdLinearRegression
// ============================================================================

/// SGD-trained linear regression as a cross-validatable [`Algorithm`].
///
/// Trains a fresh model on each fold's training set and predicts the fold's
/// test rows; no state is carried between folds.
#[derive(Debug, Clone, Default)]
pub struct SgdLinearRegression {
    params: SgdParams,
}

impl SgdLinearRegression {
    /// # Panics
    ///
    /// Panics if `learning_rate` is not positive and finite.
    pub fn new(params: SgdParams) -> Self {
        // Validate eagerly so the panic points at construction, not at the
        // first fold.
        let trainer = SgdTrainer::new(params);
        Self {
            params: trainer.params,
        }
    }
}

impl Algorithm for SgdLinearRegression {
    fn fit_predict(&self, train: &Dataset, test_features: ArrayView2<'_, f32>) -> Vec<f32> {
        let model = SgdTrainer::new(self.params.clone()).train(train);
        model.predict(test_features)
    }

    fn name(&self) -> &'static str {
        "sgd-linear-regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(learning_rate: f32, n_epochs: u32) -> SgdParams {
        SgdParams {
            learning_rate,
            n_epochs,
            verbosity: Verbosity::Silent,
        }
    }

    #[test]
    fn params_default() {
        let params = SgdParams::default();
        assert_eq!(params.learning_rate, 0.01);
        assert_eq!(params.n_epochs, 50);
    }

    #[test]
    fn zero_epochs_returns_zero_model() {
        let train = Dataset::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let model = SgdTrainer::new(quiet(0.1, 0)).train(&train);

        assert_eq!(model.bias(), 0.0);
        assert!(model.weights().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn training_is_deterministic() {
        let train = Dataset::from_rows(&[vec![0.0, 3.0], vec![1.0, 5.0], vec![2.0, 7.0]]).unwrap();
        let trainer = SgdTrainer::new(quiet(0.05, 20));

        assert_eq!(trainer.train(&train), trainer.train(&train));
    }

    #[test]
    fn converges_on_perfectly_linear_data() {
        // y = 2x + 3
        let train = Dataset::from_rows(&[
            vec![0.0, 3.0],
            vec![1.0, 5.0],
            vec![2.0, 7.0],
            vec![3.0, 9.0],
        ])
        .unwrap();

        let model = SgdTrainer::new(quiet(0.01, 2000)).train(&train);

        assert!((model.bias() - 3.0).abs() < 0.1, "bias: {}", model.bias());
        assert!(
            (model.weight(0) - 2.0).abs() < 0.1,
            "weight: {}",
            model.weight(0)
        );

        // Held-out rows following the same pattern predict near-exactly.
        let pred = model.predict_row(&[5.0]);
        assert!((pred - 13.0).abs() < 0.5, "prediction: {pred}");
    }

    #[test]
    fn training_does_not_mutate_the_dataset() {
        let train = Dataset::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let before = train.clone();
        let _ = SgdTrainer::new(quiet(0.1, 10)).train(&train);
        assert_eq!(train, before);
    }

    #[test]
    fn divergence_propagates_without_panicking() {
        // Absurd learning rate on un-normalized data blows the weights up.
        let train = Dataset::from_rows(&[vec![1000.0, 1.0], vec![-2000.0, 5.0]]).unwrap();
        let model = SgdTrainer::new(quiet(1e10, 100)).train(&train);

        assert!(!model.bias().is_finite() || !model.weight(0).is_finite());
    }

    #[test]
    #[should_panic(expected = "learning_rate must be positive")]
    fn rejects_non_positive_learning_rate() {
        SgdTrainer::new(quiet(0.0, 10));
    }

    #[test]
    fn algorithm_round_trip() {
        // y = x; train on four points, predict two unseen ones.
        let train = Dataset::from_rows(&[
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![3.0, 3.0],
        ])
        .unwrap();
        let test = ndarray::array![[1.5], [2.5]];

        let algorithm = SgdLinearRegression::new(quiet(0.01, 2000));
        let preds = algorithm.fit_predict(&train, test.view());

        assert_eq!(preds.len(), 2);
        assert!((preds[0] - 1.5).abs() < 0.2);
        assert!((preds[1] - 2.5).abs() < 0.2);
    }
}
