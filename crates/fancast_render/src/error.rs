//! Error types for fancast_render.

use thiserror::Error;

/// Result type alias using [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering or persisting a figure.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Shape violation in the inputs.
    #[error(transparent)]
    Shape(#[from] fancast_core::ShapeError),

    /// Invalid rendering configuration.
    #[error(transparent)]
    Config(#[from] fancast_core::ConfigError),

    /// Error raised by a forecast's quantile query.
    #[error(transparent)]
    Core(#[from] fancast_core::CoreError),

    /// Error raised by the drawing backend.
    #[error("drawing backend error: {0}")]
    Backend(String),

    /// I/O error while persisting the figure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
