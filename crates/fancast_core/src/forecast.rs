//! Probabilistic forecasts and quantile queries.

use ndarray::{Array2, Array3};

use crate::error::{ConfigError, Result, ShapeError};
use crate::series::TimeIndex;

/// A predictive distribution over a future horizon, per target dimension.
///
/// A forecast covers `horizon()` consecutive future timestamps and can
/// answer quantile queries at any level in `[0, 1]`. Implementations are
/// read-only to their consumers; the renderer queries quantiles and never
/// mutates the forecast.
pub trait ProbabilisticForecast {
    /// The future time axis this forecast covers.
    fn index(&self) -> &TimeIndex;

    /// Number of target dimensions forecast jointly.
    fn target_dim(&self) -> usize;

    /// The value below which fraction `q` of the predictive mass lies,
    /// per timestamp and dimension, shape `(horizon, target_dim)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::QuantileOutOfRange`] if `q` is outside
    /// `[0, 1]`.
    fn quantile(&self, q: f64) -> Result<Array2<f64>>;

    /// Length of the forecast horizon.
    fn horizon(&self) -> usize {
        self.index().len()
    }
}

/// A forecast represented by Monte Carlo sample paths.
///
/// Holds samples of shape `(num_samples, horizon, target_dim)`.
/// Quantiles are the per-timestep, per-dimension empirical quantiles of
/// the sample paths, with linear interpolation between order statistics.
#[derive(Debug, Clone)]
pub struct SampleForecast {
    samples: Array3<f64>,
    index: TimeIndex,
}

impl SampleForecast {
    /// Create a forecast from sample paths and the horizon axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoSamples`] if no sample paths are given,
    /// or [`ShapeError::HorizonMismatch`] if the horizon axis length
    /// differs from the samples' time dimension.
    pub fn new(samples: Array3<f64>, index: TimeIndex) -> Result<Self> {
        let (num_samples, horizon, _) = samples.dim();
        if num_samples == 0 {
            return Err(ShapeError::NoSamples.into());
        }
        if horizon != index.len() {
            return Err(ShapeError::HorizonMismatch {
                expected: index.len(),
                actual: horizon,
            }
            .into());
        }
        Ok(Self { samples, index })
    }

    /// Number of sample paths.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.samples.dim().0
    }

    /// The raw sample paths, shape `(num_samples, horizon, target_dim)`.
    #[must_use]
    pub fn samples(&self) -> &Array3<f64> {
        &self.samples
    }
}

impl ProbabilisticForecast for SampleForecast {
    fn index(&self) -> &TimeIndex {
        &self.index
    }

    fn target_dim(&self) -> usize {
        self.samples.dim().2
    }

    fn quantile(&self, q: f64) -> Result<Array2<f64>> {
        if !(0.0..=1.0).contains(&q) {
            return Err(ConfigError::QuantileOutOfRange(q).into());
        }
        let (num_samples, horizon, dim) = self.samples.dim();
        let mut out = Array2::<f64>::zeros((horizon, dim));
        let mut column = Vec::with_capacity(num_samples);
        for t in 0..horizon {
            for d in 0..dim {
                column.clear();
                column.extend((0..num_samples).map(|s| self.samples[[s, t, d]]));
                out[[t, d]] = empirical_quantile(&mut column, q);
            }
        }
        Ok(out)
    }
}

/// Empirical quantile of `values` with linear interpolation between
/// order statistics. Sorts in place.
fn empirical_quantile(values: &mut [f64], q: f64) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n == 1 {
        return values[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        values[lo]
    } else {
        let weight = pos - lo as f64;
        values[lo] + weight * (values[hi] - values[lo])
    }
}
