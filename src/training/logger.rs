//! Structured training output with verbosity levels.

/// How much training output to emit.
///
/// Levels are ordered; a message is printed when its level is at or below
/// the configured verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output at all. Use in tests.
    Silent,
    /// Only anomalies (e.g. a non-finite training loss).
    Warning,
    /// Per-fold scores and start/finish lines.
    Info,
    /// Per-epoch losses.
    Debug,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Warning
    }
}

/// Writer for training progress.
///
/// Deliberately not a `log`/`tracing` facade: training output is part of the
/// library's API surface (callers silence it per-run via
/// [`Verbosity::Silent`]), not application diagnostics.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn start_training(&self, n_epochs: u32) {
        if self.verbosity >= Verbosity::Info {
            println!("training: {n_epochs} epochs");
        }
    }

    pub fn log_epoch(&self, epoch: u32, mean_squared_error: f64) {
        if self.verbosity >= Verbosity::Debug {
            println!("epoch {epoch}: mse {mean_squared_error:.6}");
        }
    }

    pub fn warn_non_finite(&self, epoch: u32) {
        if self.verbosity >= Verbosity::Warning {
            println!("warning: non-finite training loss at epoch {epoch}; check the learning rate");
        }
    }

    pub fn log_fold(&self, fold: usize, metric: &str, score: f64) {
        if self.verbosity >= Verbosity::Info {
            println!("fold {fold}: {metric} {score:.6}");
        }
    }

    pub fn finish_training(&self) {
        if self.verbosity >= Verbosity::Info {
            println!("training: done");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
    }

    #[test]
    fn default_stays_quiet_below_warning() {
        assert_eq!(Verbosity::default(), Verbosity::Warning);
    }
}
