//! Fan-chart rendering of probabilistic forecasts.

use std::path::Path;

use ndarray::Array2;
use tracing::debug;

use fancast_core::{ConfigError, MultivariateSeries, ProbabilisticForecast, ShapeError};

use crate::error::Result;
use crate::figure::{Band, Figure, LegendEntry, Line, Rgb, Subplot, Swatch};
use crate::intervals::{alpha_for_percentile, width_label, IntervalSpec, PercentileSet};

/// Rendering configuration.
///
/// Defaults: a 4x4 subplot grid on a 2400x2400 px canvas, green
/// forecast series, 50% and 90% intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Subplot grid rows.
    pub rows: usize,
    /// Subplot grid columns.
    pub cols: usize,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Color of the median line and interval bands.
    pub color: Rgb,
    /// Central prediction intervals to shade.
    pub intervals: IntervalSpec,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            width: 2400,
            height: 2400,
            color: Rgb::GREEN,
            intervals: IntervalSpec::default(),
        }
    }
}

/// Render prediction-interval fan charts for a forecast against its
/// ground truth.
///
/// One subplot per target dimension, up to the grid capacity; each
/// shows the trailing `2 * prediction_length` ground-truth window, the
/// median forecast, and one shaded band per requested interval. The
/// first subplot carries the consolidated legend: observations, median
/// prediction, then the intervals in descending width order.
///
/// The returned [`Figure`] is owned by the caller; persist it with
/// [`Figure::save`] or use [`render_to_file`].
///
/// # Errors
///
/// All preconditions are checked before anything is drawn:
/// [`ConfigError`] for a zero `prediction_length` or an empty grid,
/// [`ShapeError`] for a ground-truth series shorter than
/// `2 * prediction_length`, a forecast horizon differing from
/// `prediction_length`, or a dimension mismatch between target and
/// forecast.
pub fn render<F: ProbabilisticForecast>(
    target: &MultivariateSeries,
    forecast: &F,
    prediction_length: usize,
    config: &PlotConfig,
) -> Result<Figure> {
    if prediction_length == 0 {
        return Err(ConfigError::NonPositivePredictionLength.into());
    }
    if config.rows == 0 || config.cols == 0 {
        return Err(ConfigError::EmptyGrid {
            rows: config.rows,
            cols: config.cols,
        }
        .into());
    }
    let window = 2 * prediction_length;
    if target.len() < window {
        return Err(ShapeError::SeriesTooShort {
            required: window,
            actual: target.len(),
        }
        .into());
    }
    if forecast.horizon() != prediction_length {
        return Err(ShapeError::HorizonMismatch {
            expected: prediction_length,
            actual: forecast.horizon(),
        }
        .into());
    }
    if forecast.target_dim() != target.target_dim() {
        return Err(ShapeError::DimensionMismatch {
            target: target.target_dim(),
            forecast: forecast.target_dim(),
        }
        .into());
    }

    let mut figure = Figure::new(config.rows, config.cols, config.width, config.height)?;
    if target.target_dim() == 0 {
        return Ok(figure);
    }

    let percentiles = PercentileSet::from_intervals(&config.intervals);
    // One quantile query per percentile; columns are extracted per
    // dimension below.
    let quantile_rows: Vec<Array2<f64>> = percentiles
        .percentiles()
        .iter()
        .map(|&p| forecast.quantile(p / 100.0))
        .collect::<fancast_core::Result<_>>()?;

    let observed = target.tail(window)?;
    let observed_xs: Vec<f64> = observed.index().positions().collect();
    let forecast_xs: Vec<f64> = forecast.index().positions().collect();
    let median_index = percentiles.median_index();

    let rendered = figure.capacity().min(target.target_dim());
    debug!(
        rendered,
        target_dim = target.target_dim(),
        percentiles = percentiles.len(),
        "rendering fan charts"
    );

    for dim in 0..rendered {
        let mut subplot = Subplot::new();
        subplot.push_line(Line {
            xs: observed_xs.clone(),
            ys: observed.column(dim).to_vec(),
            color: Rgb::OBSERVATIONS,
            width: 2,
        });
        subplot.push_line(Line {
            xs: forecast_xs.clone(),
            ys: quantile_rows[median_index].column(dim).to_vec(),
            color: config.color,
            width: 2,
        });
        for (lo, hi) in percentiles.pair_indices() {
            subplot.push_band(Band {
                xs: forecast_xs.clone(),
                lower: quantile_rows[lo].column(dim).to_vec(),
                upper: quantile_rows[hi].column(dim).to_vec(),
                color: config.color,
                alpha: alpha_for_percentile(percentiles.percentiles()[lo]),
            });
        }
        figure.push_subplot(subplot);
    }

    let mut legend = vec![
        LegendEntry {
            label: "observations".to_string(),
            swatch: Swatch::Line(Rgb::OBSERVATIONS),
        },
        LegendEntry {
            label: "median prediction".to_string(),
            swatch: Swatch::Line(config.color),
        },
    ];
    for width in config.intervals.widths_descending() {
        legend.push(LegendEntry {
            label: width_label(width),
            swatch: Swatch::Patch {
                color: config.color,
                alpha: alpha_for_percentile(50.0 - width / 2.0),
            },
        });
    }
    figure.set_legend(legend);

    Ok(figure)
}

/// Render and persist in one step.
///
/// # Errors
///
/// Propagates every [`render`] precondition failure plus backend and
/// I/O errors from saving.
pub fn render_to_file<F: ProbabilisticForecast>(
    target: &MultivariateSeries,
    forecast: &F,
    prediction_length: usize,
    config: &PlotConfig,
    path: impl AsRef<Path>,
) -> Result<Figure> {
    let figure = render(target, forecast, prediction_length, config)?;
    figure.save(path.as_ref())?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::DrawOp;
    use fancast_core::{Frequency, SampleForecast, Seed, TimeIndex};
    use ndarray::{Array2, Array3};
    use rand::Rng;

    fn gaussian_pair(
        timesteps: usize,
        dims: usize,
        horizon: usize,
        num_samples: usize,
    ) -> (MultivariateSeries, SampleForecast) {
        let mut rng = Seed::new(11).to_rng();
        let index = TimeIndex::new("2011-01-01 00:00", Frequency::Hourly, timesteps);
        let values = Array2::from_shape_fn((timesteps, dims), |_| rng.gen::<f64>() * 2.0 - 1.0);
        let target = MultivariateSeries::new(index.clone(), values).unwrap();
        let samples =
            Array3::from_shape_fn((num_samples, horizon, dims), |_| rng.gen::<f64>() * 2.0 - 1.0);
        let forecast = SampleForecast::new(samples, index.tail(horizon).unwrap()).unwrap();
        (target, forecast)
    }

    #[test]
    fn test_reference_scenario_structure() {
        let (target, forecast) = gaussian_pair(100, 3, 24, 100);
        let figure = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();

        assert_eq!(figure.rows(), 4);
        assert_eq!(figure.cols(), 4);
        assert_eq!(figure.subplots().len(), 3);
        for subplot in figure.subplots() {
            assert_eq!(subplot.line_count(), 2);
            assert_eq!(subplot.band_count(), 2);
        }
        let labels: Vec<&str> = figure.legend().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "observations",
                "median prediction",
                "90% prediction interval",
                "50% prediction interval"
            ]
        );
    }

    #[test]
    fn test_subplot_count_capped_by_grid() {
        let (target, forecast) = gaussian_pair(100, 20, 24, 50);
        let figure = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
        assert_eq!(figure.subplots().len(), 16);
    }

    #[test]
    fn test_observation_window_is_trailing_double_horizon() {
        let (target, forecast) = gaussian_pair(100, 1, 24, 50);
        let figure = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
        let subplot = &figure.subplots()[0];
        let DrawOp::Line(observations) = &subplot.ops()[0] else {
            panic!("first op must be the observations line");
        };
        assert_eq!(observations.xs.len(), 48);
        assert_eq!(observations.xs[0], 52.0);
        assert_eq!(*observations.xs.last().unwrap(), 99.0);
    }

    #[test]
    fn test_band_alphas_increase_inward() {
        let (target, forecast) = gaussian_pair(100, 1, 24, 50);
        let config = PlotConfig {
            intervals: IntervalSpec::new([30.0, 60.0, 90.0]).unwrap(),
            ..PlotConfig::default()
        };
        let figure = render(&target, &forecast, 24, &config).unwrap();
        let alphas: Vec<f64> = figure.subplots()[0]
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Band(band) => Some(band.alpha),
                DrawOp::Line(_) => None,
            })
            .collect();
        assert_eq!(alphas.len(), 3);
        // Outermost band first; opacity strictly increases inward.
        assert!(alphas[0] < alphas[1]);
        assert!(alphas[1] < alphas[2]);
    }

    #[test]
    fn test_band_bounds_are_ordered() {
        let (target, forecast) = gaussian_pair(100, 2, 24, 100);
        let figure = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
        for subplot in figure.subplots() {
            for op in subplot.ops() {
                if let DrawOp::Band(band) = op {
                    for (lo, hi) in band.lower.iter().zip(&band.upper) {
                        assert!(lo <= hi);
                    }
                }
            }
        }
    }

    #[test]
    fn test_short_target_fails_before_drawing() {
        let (target, forecast) = gaussian_pair(47, 2, 24, 10);
        let err = render(&target, &forecast, 24, &PlotConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::RenderError::Shape(ShapeError::SeriesTooShort { required: 48, actual: 47 })
        ));
    }

    #[test]
    fn test_horizon_mismatch_fails() {
        let (target, forecast) = gaussian_pair(100, 2, 24, 10);
        let err = render(&target, &forecast, 25, &PlotConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::RenderError::Shape(ShapeError::HorizonMismatch { .. })
        ));
    }

    #[test]
    fn test_dimension_mismatch_fails() {
        let (target, _) = gaussian_pair(100, 2, 24, 10);
        let (_, forecast) = gaussian_pair(100, 3, 24, 10);
        let err = render(&target, &forecast, 24, &PlotConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::RenderError::Shape(ShapeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_prediction_length_fails() {
        let (target, forecast) = gaussian_pair(100, 2, 24, 10);
        let err = render(&target, &forecast, 0, &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }

    #[test]
    fn test_zero_grid_fails() {
        let (target, forecast) = gaussian_pair(100, 2, 24, 10);
        let config = PlotConfig {
            rows: 0,
            ..PlotConfig::default()
        };
        let err = render(&target, &forecast, 24, &config).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }

    #[test]
    fn test_zero_dimensions_yield_empty_figure() {
        let (target, forecast) = gaussian_pair(100, 0, 24, 10);
        let figure = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
        assert!(figure.subplots().is_empty());
        assert!(figure.legend().is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let (target, forecast) = gaussian_pair(100, 3, 24, 100);
        let a = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
        let b = render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
        assert_eq!(a, b);
    }
}
