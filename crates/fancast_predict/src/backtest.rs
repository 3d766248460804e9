//! Backtest pairing of test targets with sampled forecasts.

use tracing::debug;

use fancast_core::{MultivariateSeries, SampleForecast, ShapeError};
use fancast_data::ListDataset;

use crate::error::Result;
use crate::estimator::Predictor;

/// Run a fitted predictor over a test dataset.
///
/// For each test series the predictor sees everything before the
/// trailing horizon as context; the returned pair keeps the full series
/// as ground truth, so a renderer's trailing window shows both history
/// and the forecast span.
///
/// # Errors
///
/// Returns [`ShapeError::SeriesTooShort`] if a test series does not
/// extend past the predictor's horizon, or any error the predictor
/// raises.
pub fn make_evaluation_predictions(
    test: &ListDataset,
    predictor: &dyn Predictor,
    num_samples: usize,
) -> Result<Vec<(MultivariateSeries, SampleForecast)>> {
    let horizon = predictor.prediction_length();
    let series = test.materialize()?;
    let mut pairs = Vec::with_capacity(series.len());
    for target in series {
        if target.len() <= horizon {
            return Err(ShapeError::SeriesTooShort {
                required: horizon + 1,
                actual: target.len(),
            }
            .into());
        }
        let context = target.head(target.len() - horizon)?;
        let forecast = predictor.predict(&context, num_samples)?;
        debug!(
            context = context.len(),
            horizon,
            num_samples,
            "backtest forecast generated"
        );
        pairs.push((target, forecast));
    }
    Ok(pairs)
}
