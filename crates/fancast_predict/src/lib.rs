//! # fancast_predict
//!
//! The estimator/predictor seam for fancast, plus the backtest routine
//! that pairs test targets with sampled forecasts.
//!
//! This crate provides:
//! - [`Estimator`] and [`Predictor`] traits (the modeling boundary)
//! - [`TrainerConfig`] with the shared hyperparameter surface
//! - [`EmpiricalEstimator`], the closed-form Gaussian baseline
//! - [`make_evaluation_predictions`] for backtesting a fitted predictor

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod backtest;
mod empirical;
mod error;
mod estimator;

pub use backtest::make_evaluation_predictions;
pub use empirical::{EmpiricalEstimator, EmpiricalPredictor};
pub use error::{PredictError, Result};
pub use estimator::{Estimator, Predictor, TrainerConfig};
