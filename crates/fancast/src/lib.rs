//! # fancast
//!
//! Probabilistic multivariate time-series backtesting with
//! prediction-interval fan charts.
//!
//! fancast provides the pieces of a forecast backtest pipeline:
//!
//! - **Core types**: time-indexed multivariate series, sample-path
//!   forecasts answering quantile queries
//! - **Data**: start/frequency-keyed dataset assembly and synthetic
//!   recipes
//! - **Prediction**: the estimator/predictor seam, an empirical
//!   Gaussian baseline, and the backtest routine
//! - **Rendering**: fan-chart figures with layered interval bands,
//!   persisted as bitmap or SVG
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fancast::prelude::*;
//!
//! let recipe = recipe("synthetic_normal_small")?;
//! let target = recipe.generate(Seed::new(1));
//! let (train, test) = train_test_datasets(&target, &recipe.metadata())?;
//!
//! let estimator = EmpiricalEstimator::new(24, TrainerConfig::default(), Seed::new(1));
//! let predictor = estimator.train(&train)?;
//! let pairs = make_evaluation_predictions(&test, predictor.as_ref(), 100)?;
//!
//! let (truth, forecast) = &pairs[0];
//! render_to_file(truth, forecast, 24, &PlotConfig::default(), "fan.png")?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all crates
pub use fancast_core as core;
pub use fancast_data as data;
pub use fancast_predict as predict;
pub use fancast_render as render;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fancast::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use fancast_core::{
        Frequency, MultivariateSeries, ProbabilisticForecast, SampleForecast, Seed, TimeIndex,
    };

    // Data
    pub use fancast_data::{
        recipe, synthetic_normal_target, train_test_datasets, DatasetMetadata, ListDataset,
        SeriesRecord,
    };

    // Prediction
    pub use fancast_predict::{
        make_evaluation_predictions, EmpiricalEstimator, Estimator, Predictor, TrainerConfig,
    };

    // Rendering
    pub use fancast_render::{
        render, render_to_file, Figure, IntervalSpec, PercentileSet, PlotConfig, Rgb,
    };
}
