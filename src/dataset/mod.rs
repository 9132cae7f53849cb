//! Dataset container for training and evaluation.
//!
//! # Key Types
//!
//! - [`Dataset`]: sample-major feature matrix plus a target vector
//! - [`DatasetError`]: construction-time validation failures
//!
//! # Storage Layout
//!
//! Features are stored **sample-major**: `[n_samples, n_features]`. SGD
//! consumes one sample per update, so each sample's predictors are kept
//! contiguous in memory.

mod dataset;
mod error;

pub use dataset::Dataset;
pub use error::DatasetError;
