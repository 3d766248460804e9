//! # fancast_core
//!
//! Core types for fancast probabilistic time-series forecasting.
//!
//! This crate provides:
//! - [`MultivariateSeries`] and [`TimeIndex`] for time-indexed values
//! - [`ProbabilisticForecast`] and [`SampleForecast`] for quantile queries
//! - [`Seed`] for deterministic random number generation
//! - The [`ShapeError`]/[`ConfigError`] taxonomy shared by the workspace
//!
//! ## Shape Convention
//!
//! Series values follow `(L, D)`:
//! - `L`: Sequence length (time steps)
//! - `D`: Target dimensions (series forecast jointly)
//!
//! Forecast sample paths follow `(S, H, D)` with `S` sample paths over a
//! horizon of `H` steps.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod forecast;
mod seed;
mod series;

pub use error::{ConfigError, CoreError, Result, ShapeError};
pub use forecast::{ProbabilisticForecast, SampleForecast};
pub use seed::Seed;
pub use series::{Frequency, MultivariateSeries, TimeIndex};
