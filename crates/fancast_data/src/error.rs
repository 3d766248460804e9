//! Error types for fancast_data.

use thiserror::Error;

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur in data operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// Dataset with no records.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A dataset name with no registered recipe.
    #[error("unknown dataset: {name:?}. Available: {available:?}")]
    UnknownDataset {
        /// The requested name.
        name: String,
        /// Names with registered recipes.
        available: Vec<&'static str>,
    },

    /// Core error.
    #[error(transparent)]
    Core(#[from] fancast_core::CoreError),
}

impl From<fancast_core::ShapeError> for DataError {
    fn from(err: fancast_core::ShapeError) -> Self {
        Self::Core(err.into())
    }
}

impl From<fancast_core::ConfigError> for DataError {
    fn from(err: fancast_core::ConfigError) -> Self {
        Self::Core(err.into())
    }
}
