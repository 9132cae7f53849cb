//! Min-max normalization.
//!
//! Rescales every column of a [`Dataset`] — predictors and target alike —
//! into `[0, 1]` using the column's observed range. Training on normalized
//! data keeps a single learning rate workable across columns with very
//! different scales.

use ndarray::{Array1, Array2};

use crate::dataset::Dataset;

/// Observed `(min, max)` of one column.
///
/// Invariant: `min <= max`. A column with `min == max` is *degenerate*
/// (zero variance); see [`normalize`] for how such columns are rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f32,
    pub max: f32,
}

impl ColumnRange {
    /// Range over an iterator of values.
    ///
    /// # Panics
    ///
    /// Panics on an empty iterator; the dataset invariant (at least one
    /// sample) rules that out for every caller in this crate.
    fn of(values: impl Iterator<Item = f32>) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut any = false;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        assert!(any, "column range requires at least one value");
        Self { min, max }
    }

    /// Width of the range.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// True if the column is constant (zero variance).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0
    }

    /// Rescale one value of this column into `[0, 1]`.
    ///
    /// Degenerate columns map every value to 0.0.
    #[inline]
    pub fn rescale(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            (value - self.min) / self.width()
        }
    }
}

/// Observed range of every column: predictors in column order, target last.
pub fn column_ranges(dataset: &Dataset) -> Vec<ColumnRange> {
    let mut ranges: Vec<ColumnRange> = dataset
        .features()
        .columns()
        .into_iter()
        .map(|col| ColumnRange::of(col.iter().copied()))
        .collect();
    ranges.push(ColumnRange::of(dataset.targets().iter().copied()));
    ranges
}

/// Min-max normalize every column of `dataset` into `[0, 1]`.
///
/// Returns a fresh dataset plus the per-column ranges used (predictors in
/// column order, target last) so callers can rescale further data, or undo
/// the mapping. The input is not mutated.
///
/// Constant columns have no usable range; their values all map to 0.0
/// rather than dividing by zero.
///
/// Normalizing an already-normalized dataset (per-column min 0, max 1) is
/// the identity.
pub fn normalize(dataset: &Dataset) -> (Dataset, Vec<ColumnRange>) {
    let ranges = column_ranges(dataset);
    let (n_samples, n_features) = (dataset.n_samples(), dataset.n_features());

    let mut features = Array2::zeros((n_samples, n_features));
    for (c, range) in ranges[..n_features].iter().enumerate() {
        for r in 0..n_samples {
            features[[r, c]] = range.rescale(dataset.features()[[r, c]]);
        }
    }

    let target_range = ranges[n_features];
    let targets: Array1<f32> = dataset.targets().iter().map(|&t| target_range.rescale(t)).collect();

    let normalized = Dataset::new(features, targets)
        .expect("normalization preserves dataset shape");
    (normalized, ranges)
}
