//! Plotters-backed persistence of figures.
//!
//! The figure model is backend-agnostic; this module maps its draw
//! primitives onto plotters, picking the concrete surface from the
//! output file extension.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{RenderError, Result};
use crate::figure::{DrawOp, Figure, Rgb, Swatch};

/// Persist `figure` at `path`, picking the backend by extension.
pub(crate) fn save_figure(figure: &Figure, path: &Path) -> Result<()> {
    let size = (figure.width(), figure.height());
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_figure(figure, &root)?;
            root.present().map_err(backend_err)
        }
        _ => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_figure(figure, &root)?;
            root.present().map_err(backend_err)
        }
    }
}

fn backend_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn draw_figure<DB: DrawingBackend>(figure: &Figure, root: &DrawingArea<DB, Shift>) -> Result<()> {
    root.fill(&WHITE).map_err(backend_err)?;
    let cells = root.split_evenly((figure.rows(), figure.cols()));

    for (idx, subplot) in figure.subplots().iter().enumerate() {
        let cell = &cells[idx];
        let Some((x_min, x_max, y_min, y_max)) = subplot.bounds() else {
            continue;
        };
        let y_span = y_max - y_min;
        let y_pad = if y_span > 0.0 { y_span * 0.05 } else { 1.0 };

        let mut chart = ChartBuilder::on(cell)
            .margin(6)
            .x_label_area_size(24)
            .y_label_area_size(44)
            .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + y_pad))
            .map_err(backend_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(6)
            .y_labels(5)
            .label_style(("sans-serif", 12))
            .draw()
            .map_err(backend_err)?;

        // Legend entries attach to the first subplot's series in draw
        // order, which the renderer keeps aligned with the legend list.
        let legend = if idx == 0 { figure.legend() } else { &[] };
        let mut legend_iter = legend.iter();

        for op in subplot.ops() {
            let anno = match op {
                DrawOp::Line(line) => {
                    let style = ShapeStyle::from(&to_rgb(line.color)).stroke_width(line.width);
                    let points: Vec<(f64, f64)> = line
                        .xs
                        .iter()
                        .copied()
                        .zip(line.ys.iter().copied())
                        .collect();
                    chart
                        .draw_series(LineSeries::new(points, style))
                        .map_err(backend_err)?
                }
                DrawOp::Band(band) => {
                    let fill = to_rgb(band.color).mix(band.alpha);
                    let mut points: Vec<(f64, f64)> = band
                        .xs
                        .iter()
                        .copied()
                        .zip(band.lower.iter().copied())
                        .collect();
                    points.extend(
                        band.xs
                            .iter()
                            .rev()
                            .copied()
                            .zip(band.upper.iter().rev().copied()),
                    );
                    chart
                        .draw_series(std::iter::once(Polygon::new(points, fill)))
                        .map_err(backend_err)?
                }
            };
            if let Some(entry) = legend_iter.next() {
                let swatch = entry.swatch.clone();
                anno.label(entry.label.clone())
                    .legend(move |(x, y)| match &swatch {
                        Swatch::Line(color) => PathElement::new(
                            vec![(x, y), (x + 16, y)],
                            ShapeStyle::from(&to_rgb(*color)).stroke_width(2),
                        )
                        .into_dyn(),
                        Swatch::Patch { color, alpha } => Rectangle::new(
                            [(x, y - 6), (x + 16, y + 6)],
                            to_rgb(*color).mix(*alpha).filled(),
                        )
                        .into_dyn(),
                    });
            }
        }

        if idx == 0 && !figure.legend().is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK)
                .label_font(("sans-serif", 13))
                .draw()
                .map_err(backend_err)?;
        }
    }

    Ok(())
}
