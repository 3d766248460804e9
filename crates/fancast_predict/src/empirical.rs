//! Empirical Gaussian baseline estimator.

use ndarray::{Array1, Array3, Axis};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use fancast_core::{MultivariateSeries, SampleForecast, Seed, ShapeError};
use fancast_data::ListDataset;

use crate::error::{PredictError, Result};
use crate::estimator::{Estimator, Predictor, TrainerConfig};

/// Baseline estimator fitting a per-dimension Gaussian over the
/// training window.
///
/// Forecast paths are independent Gaussian draws per timestep and
/// dimension. This is the default forecast source for tests and the
/// backtest pipeline; richer estimators plug in behind the same
/// [`Estimator`] seam.
#[derive(Debug, Clone)]
pub struct EmpiricalEstimator {
    prediction_length: usize,
    trainer: TrainerConfig,
    seed: Seed,
}

impl EmpiricalEstimator {
    /// Create an estimator forecasting `prediction_length` steps.
    #[must_use]
    pub fn new(prediction_length: usize, trainer: TrainerConfig, seed: Seed) -> Self {
        Self {
            prediction_length,
            trainer,
            seed,
        }
    }

    /// The horizon of every predictor this estimator produces.
    #[must_use]
    pub const fn prediction_length(&self) -> usize {
        self.prediction_length
    }
}

impl Estimator for EmpiricalEstimator {
    fn train(&self, dataset: &ListDataset) -> Result<Box<dyn Predictor>> {
        let series = dataset.materialize()?;
        let train = series.first().ok_or(PredictError::NoTrainingData)?;
        if train.is_empty() {
            return Err(PredictError::NoTrainingData);
        }

        info!(
            epochs = self.trainer.epochs,
            learning_rate = self.trainer.learning_rate,
            num_batches_per_epoch = self.trainer.num_batches_per_epoch,
            batch_size = self.trainer.batch_size,
            num_workers = self.trainer.num_workers,
            "fitting empirical baseline; gradient settings are ignored"
        );

        let values = train.values();
        let len = train.len() as f64;
        let means = values
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(train.target_dim()));
        let stds = Array1::from_shape_fn(train.target_dim(), |d| {
            let mean = means[d];
            let var = values
                .index_axis(Axis(1), d)
                .iter()
                .map(|v| (v - mean) * (v - mean))
                .sum::<f64>()
                / len;
            var.sqrt()
        });

        debug!(
            target_dim = train.target_dim(),
            window = train.len(),
            "empirical moments fitted"
        );

        Ok(Box::new(EmpiricalPredictor {
            prediction_length: self.prediction_length,
            means,
            stds,
            seed: self.seed.derive("empirical-predictor"),
        }))
    }
}

/// Predictor produced by [`EmpiricalEstimator`].
#[derive(Debug, Clone)]
pub struct EmpiricalPredictor {
    prediction_length: usize,
    means: Array1<f64>,
    stds: Array1<f64>,
    seed: Seed,
}

impl Predictor for EmpiricalPredictor {
    fn prediction_length(&self) -> usize {
        self.prediction_length
    }

    fn predict(&self, context: &MultivariateSeries, num_samples: usize) -> Result<SampleForecast> {
        if context.target_dim() != self.means.len() {
            return Err(ShapeError::DimensionMismatch {
                target: context.target_dim(),
                forecast: self.means.len(),
            }
            .into());
        }
        if num_samples == 0 {
            return Err(ShapeError::NoSamples.into());
        }

        let horizon = self.prediction_length;
        let dim = self.means.len();
        let mut rng = self.seed.to_rng();
        let mut samples = Array3::<f64>::zeros((num_samples, horizon, dim));
        for d in 0..dim {
            // A degenerate dimension collapses to its mean.
            let std = if self.stds[d].is_finite() && self.stds[d] > 0.0 {
                self.stds[d]
            } else {
                0.0
            };
            let normal = Normal::new(self.means[d], std).expect("non-negative finite std");
            for s in 0..num_samples {
                for t in 0..horizon {
                    samples[[s, t, d]] = normal.sample(&mut rng);
                }
            }
        }

        let index = context.index().after(horizon);
        SampleForecast::new(samples, index).map_err(PredictError::from)
    }
}
