//! # fancast_render
//!
//! Prediction-interval fan-chart rendering for fancast.
//!
//! This crate provides:
//! - [`IntervalSpec`] and [`PercentileSet`] for interval math
//! - [`Figure`] and its draw primitives, an explicitly owned drawable
//! - [`render`] and [`render_to_file`], the fan-chart routine
//!
//! ## Example
//!
//! ```rust,ignore
//! use fancast_render::{render_to_file, PlotConfig};
//!
//! let figure = render_to_file(&target, &forecast, 24, &PlotConfig::default(), "fan.png")?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod backend;
mod error;
mod figure;
mod intervals;
mod render;

pub use error::{RenderError, Result};
pub use figure::{Band, DrawOp, Figure, LegendEntry, Line, Rgb, Subplot, Swatch};
pub use intervals::{
    alpha_for_percentile, interval_label, width_label, IntervalSpec, PercentileSet,
};
pub use render::{render, render_to_file, PlotConfig};
