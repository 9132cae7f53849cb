//! Dataset construction errors.

/// Errors raised while constructing a [`Dataset`](super::Dataset).
///
/// All variants are argument-validation failures: they are raised at the
/// construction boundary and no partially-built dataset is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The input contained no rows.
    #[error("dataset must contain at least one row")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Rows must hold at least one predictor plus the target.
    #[error("rows must have at least 2 columns (predictors + target), got {0}")]
    TooFewColumns(usize),

    /// Feature matrix and target vector disagree on sample count.
    #[error("targets length {targets} does not match sample count {samples}")]
    TargetLengthMismatch { samples: usize, targets: usize },
}
