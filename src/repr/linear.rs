//! Linear model data structure.

use ndarray::ArrayView2;

/// Linear model: one intercept (bias) plus one weight per predictor.
///
/// Prediction is the plain affine form:
///
/// ```text
/// ŷ = bias + Σ weights[i] * features[i]
/// ```
///
/// # Example
///
/// ```
/// use descenders::LinearModel;
///
/// let model = LinearModel::from_parts(3.0, vec![2.0]);
/// assert_eq!(model.predict_row(&[4.0]), 11.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Intercept term.
    bias: f32,
    /// Per-predictor weights: length = n_features.
    weights: Vec<f32>,
}

impl LinearModel {
    /// Create a zero-initialized model for `n_features` predictors.
    ///
    /// # Panics
    ///
    /// Panics if `n_features` is 0; a model with no predictors cannot be
    /// fit or evaluated meaningfully.
    pub fn zeros(n_features: usize) -> Self {
        assert!(n_features > 0, "model must have at least 1 feature");
        Self {
            bias: 0.0,
            weights: vec![0.0; n_features],
        }
    }

    /// Create a model from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `weights` is empty.
    pub fn from_parts(bias: f32, weights: Vec<f32>) -> Self {
        assert!(!weights.is_empty(), "model must have at least 1 weight");
        Self { bias, weights }
    }

    /// Number of predictors.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Intercept term.
    #[inline]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Weight of one predictor.
    #[inline]
    pub fn weight(&self, feature: usize) -> f32 {
        self.weights[feature]
    }

    /// All weights, in feature order.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Add to the intercept.
    #[inline]
    pub fn add_bias(&mut self, delta: f32) {
        self.bias += delta;
    }

    /// Add to one predictor's weight.
    #[inline]
    pub fn add_weight(&mut self, feature: usize, delta: f32) {
        self.weights[feature] += delta;
    }

    /// Predict one sample.
    ///
    /// Pure function of the model and the row; `features` must have exactly
    /// `n_features` values (debug-asserted).
    #[inline]
    pub fn predict_row<'a>(&self, features: impl IntoIterator<Item = &'a f32>) -> f32 {
        let mut yhat = self.bias;
        let mut seen = 0;
        for (w, x) in self.weights.iter().zip(features) {
            yhat += w * x;
            seen += 1;
        }
        debug_assert_eq!(seen, self.weights.len(), "row length must match model");
        yhat
    }

    /// Predict every sample of a sample-major feature matrix.
    ///
    /// Returns one prediction per row, in row order.
    pub fn predict(&self, features: ArrayView2<'_, f32>) -> Vec<f32> {
        debug_assert_eq!(features.ncols(), self.n_features());
        features
            .rows()
            .into_iter()
            .map(|row| self.predict_row(row.iter()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn zero_model_predicts_zero_for_any_row() {
        let model = LinearModel::zeros(3);
        assert_eq!(model.predict_row(&[1.0, -5.0, 100.0]), 0.0);
        assert_eq!(model.predict_row(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn predict_row_is_affine() {
        let model = LinearModel::from_parts(0.5, vec![2.0, -1.0]);
        // 0.5 + 2*3 - 1*4 = 2.5
        assert_eq!(model.predict_row(&[3.0, 4.0]), 2.5);
    }

    #[test]
    fn predict_batch_matches_row_wise() {
        let model = LinearModel::from_parts(1.0, vec![2.0]);
        let features = array![[0.0], [1.0], [2.0]];

        let preds = model.predict(features.view());
        assert_eq!(preds, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn mutation_accumulates() {
        let mut model = LinearModel::zeros(2);
        model.add_bias(0.5);
        model.add_weight(1, -0.25);
        model.add_weight(1, -0.25);

        assert_eq!(model.bias(), 0.5);
        assert_eq!(model.weight(0), 0.0);
        assert_eq!(model.weight(1), -0.5);
    }

    #[test]
    #[should_panic(expected = "at least 1 feature")]
    fn zeros_rejects_featureless_model() {
        LinearModel::zeros(0);
    }
}
