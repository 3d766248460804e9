//! Error types for fancast_core.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Shape violations: inputs whose lengths or dimensions cannot be
/// reconciled with what an operation requires.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A series does not hold enough observations.
    #[error("series too short: {required} observations required, got {actual}")]
    SeriesTooShort {
        /// Minimum number of observations required.
        required: usize,
        /// Observations actually present.
        actual: usize,
    },

    /// Forecast horizon differs from the requested prediction length.
    #[error("forecast horizon is {actual}, expected {expected}")]
    HorizonMismatch {
        /// Expected horizon length.
        expected: usize,
        /// Horizon the forecast actually covers.
        actual: usize,
    },

    /// Target and forecast disagree on the number of dimensions.
    #[error("target has {target} dimensions, forecast has {forecast}")]
    DimensionMismatch {
        /// Dimensions of the ground-truth series.
        target: usize,
        /// Dimensions of the forecast.
        forecast: usize,
    },

    /// Time index length does not match the number of value rows.
    #[error("time index has {index} entries but values have {rows} rows")]
    IndexMismatch {
        /// Entries in the time index.
        index: usize,
        /// Rows in the value matrix.
        rows: usize,
    },

    /// A sample-based forecast was built without any sample paths.
    #[error("forecast has no sample paths")]
    NoSamples,
}

/// Invalid caller-supplied configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The prediction-interval set is empty.
    #[error("interval set is empty")]
    EmptyIntervals,

    /// An interval width lies outside the valid range.
    #[error("interval width {0} outside (0, 100]")]
    IntervalOutOfRange(f64),

    /// Prediction length must be at least one step.
    #[error("prediction length must be positive")]
    NonPositivePredictionLength,

    /// Subplot grid with a zero dimension.
    #[error("subplot grid must have positive dimensions, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested grid rows.
        rows: usize,
        /// Requested grid columns.
        cols: usize,
    },

    /// A quantile level outside the unit interval.
    #[error("quantile level {0} outside [0, 1]")]
    QuantileOutOfRange(f64),

    /// An unrecognized frequency code.
    #[error("unknown frequency code: {0:?}")]
    UnknownFrequency(String),
}

/// Core errors that can occur in fancast_core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Shape violation.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Configuration violation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
