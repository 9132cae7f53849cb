//! K-fold cross-validation.
//!
//! [`CrossValidator`] estimates an algorithm's generalization error: it
//! partitions a dataset into k folds, holds each fold out in turn, trains
//! on the remaining folds, predicts the held-out rows, and scores the
//! predictions. It is parametric over the [`Algorithm`] being evaluated and
//! the [`Metric`] scoring it.

use ndarray::ArrayView2;

use crate::dataset::Dataset;
use crate::utils::Parallelism;

use super::logger::{TrainingLogger, Verbosity};
use super::metrics::{Metric, MetricError, Rmse};
use super::sampling::{FoldSplitter, SplitError};

// ============================================================================
// Algorithm
// ============================================================================

/// A train-and-predict capability that can be cross-validated.
///
/// The evaluator hands an algorithm a training set with targets and the
/// held-out rows **without** targets — stripping happens at the type level,
/// so an algorithm cannot peek at the answers it is evaluated against.
pub trait Algorithm {
    /// Train on `train`, then predict each row of `test_features`.
    ///
    /// `test_features` is sample-major, `[n_test_samples, n_features]`;
    /// the result must hold one prediction per test row, in row order.
    fn fit_predict(&self, train: &Dataset, test_features: ArrayView2<'_, f32>) -> Vec<f32>;

    /// Short name for logs, e.g. `"sgd-linear-regression"`.
    fn name(&self) -> &'static str;
}

impl<A: Algorithm + ?Sized> Algorithm for &A {
    fn fit_predict(&self, train: &Dataset, test_features: ArrayView2<'_, f32>) -> Vec<f32> {
        (**self).fit_predict(train, test_features)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failures raised by [`CrossValidator::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    /// Fold assignment failed (bad `n_folds` for the dataset size).
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Scoring failed; in practice this means the algorithm returned the
    /// wrong number of predictions for a fold.
    #[error(transparent)]
    Metric(#[from] MetricError),
}

// ============================================================================
// CrossValidator
// ============================================================================

/// Parameters for cross-validation.
#[derive(Debug, Clone)]
pub struct CrossValidationParams {
    /// Number of folds. Each fold holds `floor(n_samples / n_folds)` rows.
    pub n_folds: usize,

    /// Seed for fold assignment. Same seed, same folds, same scores.
    pub seed: u64,

    /// Verbosity level for per-fold output.
    pub verbosity: Verbosity,
}

impl Default for CrossValidationParams {
    fn default() -> Self {
        Self {
            n_folds: 5,
            seed: 42,
            verbosity: Verbosity::default(),
        }
    }
}

/// K-fold cross-validation harness, generic over algorithm and metric.
///
/// # Example
///
/// ```
/// use descenders::{
///     CrossValidationParams, CrossValidator, Dataset, Parallelism, Rmse,
///     SgdLinearRegression, SgdParams, Verbosity,
/// };
///
/// let dataset = Dataset::from_rows(&[
///     vec![1.0, 1.0], vec![2.0, 3.0], vec![4.0, 3.0],
///     vec![3.0, 2.0], vec![5.0, 5.0],
/// ]).unwrap();
///
/// let algorithm = SgdLinearRegression::new(SgdParams {
///     verbosity: Verbosity::Silent,
///     ..Default::default()
/// });
/// let cv = CrossValidator::new(algorithm, Rmse, CrossValidationParams {
///     n_folds: 5,
///     seed: 1,
///     verbosity: Verbosity::Silent,
/// });
///
/// let scores = cv.evaluate(&dataset, Parallelism::Sequential).unwrap();
/// assert_eq!(scores.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct CrossValidator<A: Algorithm, M: Metric> {
    algorithm: A,
    metric: M,
    params: CrossValidationParams,
}

impl<A: Algorithm, M: Metric> CrossValidator<A, M> {
    /// Create a new cross-validator.
    pub fn new(algorithm: A, metric: M, params: CrossValidationParams) -> Self {
        Self {
            algorithm,
            metric,
            params,
        }
    }

    /// Evaluate the algorithm over every fold.
    ///
    /// Folds are assigned once, deterministically from the seed, before any
    /// (possibly parallel) per-fold work starts. For each fold in ascending
    /// order, the training set is the order-preserving concatenation of all
    /// other folds, and the fold itself is the test set.
    ///
    /// Returns exactly `n_folds` scores, one per fold, in fold order — also
    /// under `Parallelism::Parallel`, which only changes execution order,
    /// never fold assignment or result order. A diverged model shows up as
    /// a non-finite score, not an error.
    pub fn evaluate(
        &self,
        dataset: &Dataset,
        parallelism: Parallelism,
    ) -> Result<Vec<f64>, EvaluateError>
    where
        A: Sync,
        M: Sync,
    {
        let splitter = FoldSplitter::new(self.params.n_folds);
        let folds = splitter.split(dataset.n_samples(), self.params.seed)?;

        let results: Vec<Result<f64, MetricError>> =
            parallelism.maybe_par_map(0..folds.len(), |held_out| {
                self.evaluate_fold(dataset, &folds, held_out)
            });

        let logger = TrainingLogger::new(self.params.verbosity);
        let mut scores = Vec::with_capacity(folds.len());
        for (fold, result) in results.into_iter().enumerate() {
            let score = result?;
            logger.log_fold(fold, self.metric.name(), score);
            scores.push(score);
        }
        Ok(scores)
    }

    /// Train on everything but `held_out`, predict it, score it.
    fn evaluate_fold(
        &self,
        dataset: &Dataset,
        folds: &[Vec<usize>],
        held_out: usize,
    ) -> Result<f64, MetricError> {
        let train_indices: Vec<usize> = folds
            .iter()
            .enumerate()
            .filter(|&(fold, _)| fold != held_out)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();

        let train = dataset.select(&train_indices);
        let test = dataset.select(&folds[held_out]);

        let actual = test.targets().to_vec();
        let predicted = self.algorithm.fit_predict(&train, test.features());

        self.metric.compute(&actual, &predicted)
    }
}

/// Cross-validate `algorithm` with RMSE scoring, sequentially.
///
/// Convenience wrapper over [`CrossValidator`] for the common case; use the
/// struct directly to pick another metric, verbosity, or fold-level
/// parallelism.
pub fn cross_validate(
    dataset: &Dataset,
    algorithm: &(impl Algorithm + Sync),
    n_folds: usize,
    seed: u64,
) -> Result<Vec<f64>, EvaluateError> {
    let cv = CrossValidator::new(
        algorithm,
        Rmse,
        CrossValidationParams {
            n_folds,
            seed,
            verbosity: Verbosity::default(),
        },
    );
    cv.evaluate(dataset, Parallelism::Sequential)
}
