//! Error types for fancast_predict.

use thiserror::Error;

/// Result type alias using [`PredictError`].
pub type Result<T> = std::result::Result<T, PredictError>;

/// Errors that can occur while training or forecasting.
#[derive(Error, Debug)]
pub enum PredictError {
    /// Training dataset with nothing to fit on.
    #[error("training dataset has no usable series")]
    NoTrainingData,

    /// Data error.
    #[error(transparent)]
    Data(#[from] fancast_data::DataError),

    /// Core error.
    #[error(transparent)]
    Core(#[from] fancast_core::CoreError),
}

impl From<fancast_core::ShapeError> for PredictError {
    fn from(err: fancast_core::ShapeError) -> Self {
        Self::Core(err.into())
    }
}

impl From<fancast_core::ConfigError> for PredictError {
    fn from(err: fancast_core::ConfigError) -> Self {
        Self::Core(err.into())
    }
}
