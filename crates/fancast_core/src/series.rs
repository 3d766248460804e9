//! Time axes and multivariate series values.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, ShapeError};

/// Period unit of a time axis.
///
/// Parsed from the single-letter codes dataset metadata carries
/// (e.g. `"H"` for hourly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Secondly (S)
    Secondly,
    /// Minutely (T)
    Minutely,
    /// Hourly (H)
    Hourly,
    /// Daily (D)
    Daily,
    /// Weekly (W)
    Weekly,
    /// Monthly (M)
    Monthly,
    /// Quarterly (Q)
    Quarterly,
    /// Yearly (Y)
    Yearly,
}

impl Frequency {
    /// The canonical single-letter code for this frequency.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Secondly => "S",
            Self::Minutely => "T",
            Self::Hourly => "H",
            Self::Daily => "D",
            Self::Weekly => "W",
            Self::Monthly => "M",
            Self::Quarterly => "Q",
            Self::Yearly => "Y",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" | "SECONDLY" => Ok(Self::Secondly),
            "T" | "MIN" | "MINUTELY" => Ok(Self::Minutely),
            "H" | "HOURLY" => Ok(Self::Hourly),
            "D" | "DAILY" => Ok(Self::Daily),
            "W" | "WEEKLY" => Ok(Self::Weekly),
            "M" | "MONTHLY" => Ok(Self::Monthly),
            "Q" | "QUARTERLY" => Ok(Self::Quarterly),
            "Y" | "A" | "YEARLY" | "ANNUAL" => Ok(Self::Yearly),
            other => Err(ConfigError::UnknownFrequency(other.to_string())),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// An ordered, monotonically increasing time axis.
///
/// A `TimeIndex` is keyed by a start timestamp plus a frequency, the way
/// dataset metadata describes raw targets. Entries are consecutive
/// periods; `offset` counts periods between the origin timestamp and the
/// first entry, so derived windows (tails, forecast horizons) stay on the
/// same axis and overlay correctly when plotted.
///
/// # Example
///
/// ```rust
/// use fancast_core::{Frequency, TimeIndex};
///
/// let index = TimeIndex::new("2011-01-01 00:00", Frequency::Hourly, 100);
/// let horizon = index.after(24);
/// assert_eq!(horizon.len(), 24);
/// assert_eq!(horizon.position(0), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeIndex {
    origin: String,
    offset: i64,
    freq: Frequency,
    len: usize,
}

impl TimeIndex {
    /// Create a time axis starting at the origin timestamp.
    #[must_use]
    pub fn new(origin: impl Into<String>, freq: Frequency, len: usize) -> Self {
        Self {
            origin: origin.into(),
            offset: 0,
            freq,
            len,
        }
    }

    /// The origin timestamp label this axis is anchored to.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Periods between the origin and the first entry.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// The period unit of this axis.
    #[must_use]
    pub const fn freq(&self) -> Frequency {
        self.freq
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the axis has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Numeric axis coordinate of entry `i`, in periods since the origin.
    #[must_use]
    pub fn position(&self, i: usize) -> f64 {
        self.offset as f64 + i as f64
    }

    /// Iterate over the numeric coordinates of all entries.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.position(i))
    }

    /// The trailing `n` entries of this axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SeriesTooShort`] if the axis holds fewer
    /// than `n` entries.
    pub fn tail(&self, n: usize) -> Result<Self> {
        if n > self.len {
            return Err(ShapeError::SeriesTooShort {
                required: n,
                actual: self.len,
            }
            .into());
        }
        Ok(Self {
            origin: self.origin.clone(),
            offset: self.offset + (self.len - n) as i64,
            freq: self.freq,
            len: n,
        })
    }

    /// The axis covering the `n` periods immediately following this one.
    #[must_use]
    pub fn after(&self, n: usize) -> Self {
        Self {
            origin: self.origin.clone(),
            offset: self.offset + self.len as i64,
            freq: self.freq,
            len: n,
        }
    }
}

impl std::fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} +{}{} (len={})",
            self.origin, self.offset, self.freq, self.len
        )
    }
}

/// An immutable multivariate time series.
///
/// Holds a [`TimeIndex`] and a value matrix of shape
/// `(len, target_dim)`: one row per timestamp, one column per target
/// dimension. Produced by the data pipeline; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariateSeries {
    index: TimeIndex,
    values: Array2<f64>,
}

impl MultivariateSeries {
    /// Create a series from a time axis and parallel value rows.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IndexMismatch`] if the axis length differs
    /// from the number of value rows.
    pub fn new(index: TimeIndex, values: Array2<f64>) -> Result<Self> {
        if index.len() != values.nrows() {
            return Err(ShapeError::IndexMismatch {
                index: index.len(),
                rows: values.nrows(),
            }
            .into());
        }
        Ok(Self { index, values })
    }

    /// The time axis of this series.
    #[must_use]
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of target dimensions.
    #[must_use]
    pub fn target_dim(&self) -> usize {
        self.values.ncols()
    }

    /// The full value matrix, shape `(len, target_dim)`.
    #[must_use]
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// One target dimension as a view over all timestamps.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= target_dim()`.
    #[must_use]
    pub fn column(&self, dim: usize) -> ArrayView1<'_, f64> {
        self.values.index_axis(Axis(1), dim)
    }

    /// The trailing `n` observations as an owned series.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SeriesTooShort`] if fewer than `n`
    /// observations are present.
    pub fn tail(&self, n: usize) -> Result<Self> {
        let index = self.index.tail(n)?;
        let start = self.len() - n;
        let values = self.values.slice(ndarray::s![start.., ..]).to_owned();
        Ok(Self { index, values })
    }

    /// The leading `n` observations as an owned series.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SeriesTooShort`] if fewer than `n`
    /// observations are present.
    pub fn head(&self, n: usize) -> Result<Self> {
        if n > self.len() {
            return Err(ShapeError::SeriesTooShort {
                required: n,
                actual: self.len(),
            }
            .into());
        }
        let index = TimeIndex {
            origin: self.index.origin.clone(),
            offset: self.index.offset,
            freq: self.index.freq,
            len: n,
        };
        let values = self.values.slice(ndarray::s![..n, ..]).to_owned();
        Ok(Self { index, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn hourly(len: usize) -> TimeIndex {
        TimeIndex::new("2011-01-01 00:00", Frequency::Hourly, len)
    }

    #[test]
    fn test_frequency_codes_round_trip() {
        for freq in [
            Frequency::Secondly,
            Frequency::Minutely,
            Frequency::Hourly,
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Yearly,
        ] {
            assert_eq!(freq.code().parse::<Frequency>().unwrap(), freq);
        }
        assert!("X".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_index_positions_are_consecutive() {
        let index = hourly(5);
        let positions: Vec<f64> = index.positions().collect();
        assert_eq!(positions, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_index_tail_keeps_axis_alignment() {
        let index = hourly(100);
        let tail = index.tail(48).unwrap();
        assert_eq!(tail.len(), 48);
        assert_eq!(tail.position(0), 52.0);
        assert_eq!(tail.position(47), 99.0);
        assert!(index.tail(101).is_err());
    }

    #[test]
    fn test_index_after_follows_end() {
        let index = hourly(100);
        let horizon = index.after(24);
        assert_eq!(horizon.len(), 24);
        assert_eq!(horizon.position(0), 100.0);
        // The horizon starts one period after the end of the base axis.
        let tail = index.tail(24).unwrap();
        assert_eq!(tail.position(23) + 1.0, horizon.position(0));
    }

    #[test]
    fn test_series_rejects_index_mismatch() {
        let values = Array2::<f64>::zeros((10, 3));
        assert!(MultivariateSeries::new(hourly(9), values).is_err());
    }

    #[test]
    fn test_series_accessors() {
        let values = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let series = MultivariateSeries::new(hourly(3), values).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.target_dim(), 2);
        assert_eq!(series.column(1).to_vec(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_series_head_keeps_origin() {
        let values = array![[1.0], [2.0], [3.0], [4.0]];
        let series = MultivariateSeries::new(hourly(4), values).unwrap();
        let head = series.head(3).unwrap();
        assert_eq!(head.len(), 3);
        assert_eq!(head.index().position(0), 0.0);
        assert_eq!(head.column(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(series.head(5).is_err());
    }

    #[test]
    fn test_series_tail_values_and_index() {
        let values = array![[1.0], [2.0], [3.0], [4.0]];
        let series = MultivariateSeries::new(hourly(4), values).unwrap();
        let tail = series.tail(2).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.index().position(0), 2.0);
        assert_eq!(tail.column(0).to_vec(), vec![3.0, 4.0]);
        assert!(series.tail(5).is_err());
    }
}
