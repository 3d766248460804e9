//! Estimator and predictor traits.
//!
//! The traits are the boundary to the modeling stack: an [`Estimator`]
//! turns a training dataset into a fitted [`Predictor`], and a predictor
//! turns a context window into a sample-path forecast. Heavy estimators
//! (neural, diffusion-based) live behind this seam in external crates;
//! this repository ships the empirical baseline.

use serde::{Deserialize, Serialize};

use fancast_core::{MultivariateSeries, SampleForecast};
use fancast_data::ListDataset;

use crate::error::Result;

/// Hyperparameter surface shared by estimator training procedures.
///
/// Baseline estimators fit in closed form and consume only part of the
/// surface; the unused knobs are logged and ignored rather than
/// rejected, so one CLI works for every estimator behind the seam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Passes over the training data.
    pub epochs: usize,
    /// Optimizer step size.
    pub learning_rate: f64,
    /// Gradient steps per epoch.
    pub num_batches_per_epoch: usize,
    /// Series windows per gradient step.
    pub batch_size: usize,
    /// Data-loading worker count.
    pub num_workers: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 20,
            learning_rate: 1e-3,
            num_batches_per_epoch: 100,
            batch_size: 64,
            num_workers: 8,
        }
    }
}

/// A training procedure producing a fitted predictor.
pub trait Estimator {
    /// Fit on the training dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be materialized or holds
    /// nothing to fit on.
    fn train(&self, dataset: &ListDataset) -> Result<Box<dyn Predictor>>;
}

/// A fitted model that forecasts a fixed horizon past a context window.
pub trait Predictor {
    /// The horizon every forecast from this predictor covers.
    fn prediction_length(&self) -> usize;

    /// Sample `num_samples` forecast paths for the periods following
    /// `context`.
    ///
    /// The forecast's time axis is `context.index().after(h)` for this
    /// predictor's horizon `h`, so forecast and context share one axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the context is incompatible with the fitted
    /// model (e.g. dimension mismatch) or `num_samples` is zero.
    fn predict(&self, context: &MultivariateSeries, num_samples: usize) -> Result<SampleForecast>;
}
