//! Prediction-interval specifications and derived percentile sets.

use serde::{Deserialize, Serialize};

use fancast_core::ConfigError;

/// An ordered set of symmetric central prediction-interval widths.
///
/// Each width is the percent of predictive mass the interval covers:
/// `90` spans the 5th to 95th percentile. Duplicates are dropped,
/// supplied order is kept.
///
/// # Example
///
/// ```rust
/// use fancast_render::IntervalSpec;
///
/// let spec = IntervalSpec::default();
/// assert_eq!(spec.widths(), &[50.0, 90.0]);
/// assert!(IntervalSpec::new([0.0]).is_err());
/// assert!(IntervalSpec::new([]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSpec {
    widths: Vec<f64>,
}

impl IntervalSpec {
    /// Create a spec from interval widths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIntervals`] for an empty set and
    /// [`ConfigError::IntervalOutOfRange`] for any width outside
    /// `(0, 100]`.
    pub fn new(widths: impl IntoIterator<Item = f64>) -> Result<Self, ConfigError> {
        let mut kept: Vec<f64> = Vec::new();
        for width in widths {
            if !width.is_finite() || width <= 0.0 || width > 100.0 {
                return Err(ConfigError::IntervalOutOfRange(width));
            }
            if !kept.contains(&width) {
                kept.push(width);
            }
        }
        if kept.is_empty() {
            return Err(ConfigError::EmptyIntervals);
        }
        Ok(Self { widths: kept })
    }

    /// The deduplicated widths in supplied order.
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// The widths in descending order, the order legend entries use.
    #[must_use]
    pub fn widths_descending(&self) -> Vec<f64> {
        let mut sorted = self.widths.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}

impl Default for IntervalSpec {
    fn default() -> Self {
        Self {
            widths: vec![50.0, 90.0],
        }
    }
}

/// The minimal percentile set needed to draw a median line plus every
/// requested band: the median and, per width `c`, the tail percentiles
/// `50 ± c/2`, deduplicated and sorted ascending.
///
/// Invariants: symmetric about 50, contains 50 exactly once, odd
/// cardinality.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileSet {
    percentiles: Vec<f64>,
}

impl PercentileSet {
    /// Derive the percentile set for an interval spec.
    #[must_use]
    pub fn from_intervals(spec: &IntervalSpec) -> Self {
        let mut percentiles = vec![50.0];
        for &width in spec.widths() {
            percentiles.push(50.0 - width / 2.0);
            percentiles.push(50.0 + width / 2.0);
        }
        percentiles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        percentiles.dedup();
        Self { percentiles }
    }

    /// The sorted percentiles.
    #[must_use]
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Number of percentiles (always odd).
    #[must_use]
    pub fn len(&self) -> usize {
        self.percentiles.len()
    }

    /// Whether the set is empty (never, by construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percentiles.is_empty()
    }

    /// Index of the median in the sorted set.
    #[must_use]
    pub fn median_index(&self) -> usize {
        self.percentiles.len() / 2
    }

    /// Symmetric tail pairs as index pairs `(lower, upper)`, outermost
    /// (widest interval) first.
    pub fn pair_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.percentiles.len();
        (0..n / 2).map(move |i| (i, n - 1 - i))
    }
}

/// Band opacity for the lower-tail percentile of a pair.
///
/// Maps the raw percentile value, not the interval width, so inner
/// (narrower) bands come out more opaque than outer ones.
#[must_use]
pub fn alpha_for_percentile(percentile: f64) -> f64 {
    (percentile / 100.0).powf(0.3)
}

/// Legend label for the band whose lower tail sits at `percentile`.
#[must_use]
pub fn interval_label(lower_percentile: f64) -> String {
    format!(
        "{}% prediction interval",
        format_percent(100.0 - 2.0 * lower_percentile)
    )
}

/// Legend label for an interval of the given width.
#[must_use]
pub fn width_label(width: f64) -> String {
    format!("{}% prediction interval", format_percent(width))
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
