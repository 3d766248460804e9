//! Dataset assembly from raw targets and start/frequency metadata.
//!
//! Raw targets arrive as a `(target_dim, len)` matrix keyed by a start
//! timestamp and a frequency. Records keep that layout; materializing a
//! record attaches a [`TimeIndex`] and transposes into the `(len, dim)`
//! form the rest of the pipeline consumes.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use fancast_core::{ConfigError, Frequency, MultivariateSeries, ShapeError, TimeIndex};

use crate::error::{DataError, Result};

/// Start/frequency/horizon metadata describing a raw target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Forecast horizon the dataset is evaluated at.
    pub prediction_length: usize,
    /// Start timestamp of the first observation.
    pub start: String,
    /// Period unit of the time axis.
    pub freq: Frequency,
}

/// One raw dataset entry: a `(target_dim, len)` value matrix plus its
/// start timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRecord {
    /// Raw values, one row per target dimension.
    pub target: Array2<f64>,
    /// Start timestamp of the first observation.
    pub start: String,
}

/// An ordered collection of raw series records sharing one frequency.
#[derive(Debug, Clone)]
pub struct ListDataset {
    records: Vec<SeriesRecord>,
    freq: Frequency,
}

impl ListDataset {
    /// Create a dataset from records and their common frequency.
    #[must_use]
    pub fn new(records: Vec<SeriesRecord>, freq: Frequency) -> Self {
        Self { records, freq }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The common frequency of all records.
    #[must_use]
    pub fn freq(&self) -> Frequency {
        self.freq
    }

    /// Iterate over the raw records.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesRecord> {
        self.records.iter()
    }

    /// Convert every record into a time-indexed [`MultivariateSeries`].
    ///
    /// Values are transposed from the record's `(dim, len)` layout into
    /// the `(len, dim)` layout of materialized series.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty.
    pub fn materialize(&self) -> Result<Vec<MultivariateSeries>> {
        if self.records.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        self.records
            .iter()
            .map(|record| {
                let len = record.target.ncols();
                let index = TimeIndex::new(record.start.clone(), self.freq, len);
                let values = record.target.t().to_owned();
                MultivariateSeries::new(index, values).map_err(DataError::from)
            })
            .collect()
    }
}

/// Build the train/test dataset pair for a backtest at the metadata's
/// horizon: the training record drops the trailing `prediction_length`
/// observations, the test record keeps the full target.
///
/// # Errors
///
/// Returns [`ConfigError::NonPositivePredictionLength`] for a zero
/// horizon, and [`ShapeError::SeriesTooShort`] if the target does not
/// extend past the horizon (the training split would be empty).
pub fn train_test_datasets(
    target: &Array2<f64>,
    metadata: &DatasetMetadata,
) -> Result<(ListDataset, ListDataset)> {
    let horizon = metadata.prediction_length;
    if horizon == 0 {
        return Err(ConfigError::NonPositivePredictionLength.into());
    }
    let len = target.ncols();
    if len <= horizon {
        return Err(ShapeError::SeriesTooShort {
            required: horizon + 1,
            actual: len,
        }
        .into());
    }

    let train_target = target.slice(ndarray::s![.., ..len - horizon]).to_owned();
    let train = ListDataset::new(
        vec![SeriesRecord {
            target: train_target,
            start: metadata.start.clone(),
        }],
        metadata.freq,
    );
    let test = ListDataset::new(
        vec![SeriesRecord {
            target: target.clone(),
            start: metadata.start.clone(),
        }],
        metadata.freq,
    );
    Ok((train, test))
}
