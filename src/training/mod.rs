//! Training and evaluation infrastructure.
//!
//! ## Shared Infrastructure
//!
//! - [`Metric`], [`Rmse`], [`Mae`]: scoring predictions against targets
//! - [`FoldSplitter`]: seeded k-fold assignment of row indices
//! - [`TrainingLogger`], [`Verbosity`]: structured training output
//!
//! ## Training
//!
//! - [`SgdTrainer`] / [`SgdParams`]: per-row gradient descent for linear
//!   regression
//!
//! ## Evaluation
//!
//! - [`Algorithm`]: the train-and-predict capability under evaluation
//! - [`CrossValidator`] / [`cross_validate`]: k-fold cross-validation

mod eval;
mod logger;
mod metrics;
mod sampling;
mod sgd;

pub use eval::{cross_validate, Algorithm, CrossValidationParams, CrossValidator, EvaluateError};
pub use logger::{TrainingLogger, Verbosity};
pub use metrics::{mean_score, Mae, Metric, MetricError, Rmse};
pub use sampling::{FoldSplitter, SplitError};
pub use sgd::{SgdLinearRegression, SgdParams, SgdTrainer};
