//! Regression metrics.
//!
//! Metrics compare held-out targets against predictions. Inputs are `f32`
//! (matching the data path); accumulation happens in `f64` so long sums do
//! not lose precision.

// =============================================================================
// Errors
// =============================================================================

/// Argument-validation failures raised by [`Metric::compute`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// `actual` and `predicted` must pair up one to one.
    #[error("length mismatch: {actual} actual vs {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },

    /// A mean over zero values is undefined.
    #[error("cannot score an empty prediction set")]
    Empty,
}

fn check_lengths(actual: &[f32], predicted: &[f32]) -> Result<(), MetricError> {
    if actual.len() != predicted.len() {
        return Err(MetricError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(MetricError::Empty);
    }
    Ok(())
}

// =============================================================================
// Metric
// =============================================================================

/// An evaluation metric over paired actual/predicted values.
pub trait Metric {
    /// Compute the metric.
    ///
    /// # Errors
    ///
    /// Fails fast with [`MetricError`] on mismatched lengths or empty input;
    /// no partial result is produced.
    fn compute(&self, actual: &[f32], predicted: &[f32]) -> Result<f64, MetricError>;

    /// Whether larger values indicate a better model.
    fn higher_is_better(&self) -> bool;

    /// Short lowercase name, e.g. `"rmse"`.
    fn name(&self) -> &'static str;
}

// =============================================================================
// RMSE (Root Mean Squared Error)
// =============================================================================

/// Root Mean Squared Error: `sqrt(mean((predicted - actual)²))`.
///
/// Lower is better. Never negative. Non-finite predictions (a diverged
/// model) propagate to a non-finite score rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl Metric for Rmse {
    fn compute(&self, actual: &[f32], predicted: &[f32]) -> Result<f64, MetricError> {
        check_lengths(actual, predicted)?;

        let sum_sq: f64 = actual
            .iter()
            .zip(predicted.iter())
            .map(|(&a, &p)| {
                let diff = p as f64 - a as f64;
                diff * diff
            })
            .sum();
        Ok((sum_sq / actual.len() as f64).sqrt())
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "rmse"
    }
}

// =============================================================================
// MAE (Mean Absolute Error)
// =============================================================================

/// Mean Absolute Error: `mean(|predicted - actual|)`.
///
/// Lower is better. Less sensitive to outliers than [`Rmse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl Metric for Mae {
    fn compute(&self, actual: &[f32], predicted: &[f32]) -> Result<f64, MetricError> {
        check_lengths(actual, predicted)?;

        let sum: f64 = actual
            .iter()
            .zip(predicted.iter())
            .map(|(&a, &p)| (p as f64 - a as f64).abs())
            .sum();
        Ok(sum / actual.len() as f64)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mae"
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Mean of a list of per-fold scores.
///
/// Returns `f64::NAN` for an empty list; non-finite fold scores (divergence)
/// propagate into the mean.
pub fn mean_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return f64::NAN;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rmse_perfect() {
        let v = [1.0, 2.0, 3.0];
        let rmse = Rmse.compute(&v, &v).unwrap();
        assert!(rmse.abs() < 1e-12);
    }

    #[test]
    fn rmse_known_value() {
        // RMSE of [1, 2] vs [0, 0] = sqrt((1 + 4) / 2) = sqrt(2.5)
        let rmse = Rmse.compute(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert!((rmse - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rmse_is_never_negative() {
        let rmse = Rmse.compute(&[5.0, -5.0], &[-5.0, 5.0]).unwrap();
        assert!(rmse >= 0.0);
    }

    #[test]
    fn rmse_rejects_length_mismatch() {
        let err = Rmse.compute(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            MetricError::LengthMismatch {
                actual: 1,
                predicted: 2
            }
        );
    }

    #[test]
    fn rmse_rejects_empty() {
        assert_eq!(Rmse.compute(&[], &[]).unwrap_err(), MetricError::Empty);
    }

    #[test]
    fn rmse_propagates_non_finite_predictions() {
        let rmse = Rmse.compute(&[1.0], &[f32::INFINITY]).unwrap();
        assert!(!rmse.is_finite());
    }

    #[test]
    fn mae_known_value() {
        // MAE of [1, 3] vs [0, 0] = (1 + 3) / 2 = 2
        let mae = Mae.compute(&[0.0, 0.0], &[1.0, 3.0]).unwrap();
        assert!((mae - 2.0).abs() < 1e-12);
    }

    #[test]
    fn mae_and_rmse_agree_on_perfect_predictions() {
        let v = [0.5, 0.25, 0.75];
        assert_eq!(Mae.compute(&v, &v).unwrap(), 0.0);
        assert_eq!(Rmse.compute(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn metric_properties() {
        assert!(!Rmse.higher_is_better());
        assert!(!Mae.higher_is_better());
        assert_eq!(Rmse.name(), "rmse");
        assert_eq!(Mae.name(), "mae");
    }

    #[test]
    fn mean_of_scores() {
        assert_eq!(mean_score(&[1.0, 2.0, 3.0]), 2.0);
        assert!(mean_score(&[]).is_nan());
        assert!(!mean_score(&[1.0, f64::INFINITY]).is_finite());
    }
}
