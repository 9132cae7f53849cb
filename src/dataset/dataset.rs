//! Dataset container.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use super::error::DatasetError;

/// Numeric dataset: a feature matrix plus one target per sample.
///
/// # Storage Layout
///
/// Features are stored **sample-major**: `[n_samples, n_features]`, so each
/// sample's predictors are contiguous. SGD visits one sample at a time, which
/// makes row access the hot path.
///
/// Targets are stored separately as a vector of length `n_samples`.
///
/// # Invariants
///
/// - At least one sample and at least one feature.
/// - `targets.len() == n_samples`.
///
/// Both are enforced at construction; every other component in the crate may
/// rely on them.
///
/// # Example
///
/// ```
/// use descenders::Dataset;
///
/// // Rows carry the target as their last value.
/// let ds = Dataset::from_rows(&[
///     vec![1.0, 1.0],
///     vec![2.0, 3.0],
///     vec![4.0, 3.0],
/// ]).unwrap();
///
/// assert_eq!(ds.n_samples(), 3);
/// assert_eq!(ds.n_features(), 1);
/// assert_eq!(ds.target(1), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Feature values: `[n_samples, n_features]` (sample-major).
    features: Array2<f32>,

    /// Target values: length = n_samples.
    targets: Array1<f32>,
}

impl Dataset {
    /// Create a dataset from a sample-major feature matrix and targets.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Empty`] if `features` has no rows
    /// - [`DatasetError::TooFewColumns`] if `features` has no columns
    /// - [`DatasetError::TargetLengthMismatch`] if `targets` and `features`
    ///   disagree on the sample count
    pub fn new(features: Array2<f32>, targets: Array1<f32>) -> Result<Self, DatasetError> {
        if features.nrows() == 0 {
            return Err(DatasetError::Empty);
        }
        if features.ncols() == 0 {
            return Err(DatasetError::TooFewColumns(1));
        }
        if targets.len() != features.nrows() {
            return Err(DatasetError::TargetLengthMismatch {
                samples: features.nrows(),
                targets: targets.len(),
            });
        }

        Ok(Self { features, targets })
    }

    /// Create a dataset from raw rows whose **last value is the target**.
    ///
    /// This is the bridge from whatever parsed the data: every row must have
    /// the same length, and that length must be at least 2 (one predictor
    /// plus the target).
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Empty`] if `rows` is empty
    /// - [`DatasetError::TooFewColumns`] if rows have fewer than 2 values
    /// - [`DatasetError::RaggedRow`] if any row's length differs from the first
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, DatasetError> {
        let first = rows.first().ok_or(DatasetError::Empty)?;
        let width = first.len();
        if width < 2 {
            return Err(DatasetError::TooFewColumns(width));
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(DatasetError::RaggedRow {
                    row,
                    expected: width,
                    got: values.len(),
                });
            }
        }

        let n_features = width - 1;
        let mut features = Array2::zeros((rows.len(), n_features));
        let mut targets = Array1::zeros(rows.len());
        for (r, values) in rows.iter().enumerate() {
            for (c, &v) in values[..n_features].iter().enumerate() {
                features[[r, c]] = v;
            }
            targets[r] = values[n_features];
        }

        Self::new(features, targets)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of predictor columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature matrix view: `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Target vector view: length = n_samples.
    #[inline]
    pub fn targets(&self) -> ArrayView1<'_, f32> {
        self.targets.view()
    }

    /// Predictors of a single sample.
    #[inline]
    pub fn row(&self, sample: usize) -> ArrayView1<'_, f32> {
        self.features.row(sample)
    }

    /// Target of a single sample.
    #[inline]
    pub fn target(&self, sample: usize) -> f32 {
        self.targets[sample]
    }

    /// Gather a new dataset from the given sample indices, in order.
    ///
    /// Used by cross-validation to materialize folds and fold-complements.
    /// Indices may repeat; each out-of-bounds index panics.
    pub fn select(&self, indices: &[usize]) -> Self {
        let features = self.features.select(Axis(0), indices);
        let targets = self.targets.select(Axis(0), indices);
        Self { features, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_rows_splits_target_off() {
        let ds = Dataset::from_rows(&[vec![1.0, 2.0, 10.0], vec![3.0, 4.0, 20.0]]).unwrap();

        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.features(), array![[1.0, 2.0], [3.0, 4.0]].view());
        assert_eq!(ds.targets(), array![10.0, 20.0].view());
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(Dataset::from_rows(&[]), Err(DatasetError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Dataset::from_rows(&[vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::RaggedRow {
                row: 1,
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn from_rows_rejects_target_only_rows() {
        let err = Dataset::from_rows(&[vec![1.0]]).unwrap_err();
        assert_eq!(err, DatasetError::TooFewColumns(1));
    }

    #[test]
    fn new_rejects_target_mismatch() {
        let err = Dataset::new(array![[1.0], [2.0]], array![1.0]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::TargetLengthMismatch {
                samples: 2,
                targets: 1
            }
        );
    }

    #[test]
    fn select_gathers_in_order() {
        let ds = Dataset::from_rows(&[
            vec![0.0, 0.0],
            vec![1.0, 10.0],
            vec![2.0, 20.0],
            vec![3.0, 30.0],
        ])
        .unwrap();

        let sub = ds.select(&[2, 0]);
        assert_eq!(sub.n_samples(), 2);
        assert_eq!(sub.row(0)[0], 2.0);
        assert_eq!(sub.target(0), 20.0);
        assert_eq!(sub.row(1)[0], 0.0);
        assert_eq!(sub.target(1), 0.0);
    }
}
