//! descenders: linear regression by stochastic gradient descent.
//!
//! A small library for fitting linear models with SGD and estimating their
//! generalization error with seeded k-fold cross-validation.
//!
//! # Key Types
//!
//! - [`Dataset`] - Data handling (sample-major features + targets)
//! - [`SgdTrainer`] / [`SgdParams`] - Training
//! - [`LinearModel`] - The fitted coefficients, with prediction
//! - [`CrossValidator`] / [`Algorithm`] / [`Metric`] - Evaluation
//!
//! # Pipeline
//!
//! Load a [`Dataset`], [`normalize`] it, then either train directly with
//! [`SgdTrainer`] or estimate generalization error with [`cross_validate`]:
//!
//! ```
//! use descenders::{
//!     cross_validate, mean_score, normalize, Dataset, SgdLinearRegression,
//!     SgdParams, Verbosity,
//! };
//!
//! let raw = Dataset::from_rows(&[
//!     vec![1.0, 1.0], vec![2.0, 3.0], vec![4.0, 3.0],
//!     vec![3.0, 2.0], vec![5.0, 5.0],
//! ]).unwrap();
//! let (dataset, _ranges) = normalize(&raw);
//!
//! let algorithm = SgdLinearRegression::new(SgdParams {
//!     learning_rate: 0.01,
//!     n_epochs: 50,
//!     verbosity: Verbosity::Silent,
//! });
//! let scores = cross_validate(&dataset, &algorithm, 5, 1).unwrap();
//!
//! assert_eq!(scores.len(), 5);
//! assert!(mean_score(&scores).is_finite());
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod dataset;
pub mod preprocess;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Data types
pub use dataset::{Dataset, DatasetError};

// Preprocessing
pub use preprocess::{column_ranges, normalize, ColumnRange};

// Model representation
pub use repr::linear::LinearModel;

// Training and evaluation
pub use training::{
    cross_validate, mean_score, Algorithm, CrossValidationParams, CrossValidator, EvaluateError,
    FoldSplitter, Mae, Metric, MetricError, Rmse, SgdLinearRegression, SgdParams, SgdTrainer,
    SplitError, TrainingLogger, Verbosity,
};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
