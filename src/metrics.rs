//! Accuracy metrics comparing forecasts against held-out ground truth
//!
//! All metrics operate on the overlap of the two date indices; points
//! present in only one series are ignored. A denominator of zero makes
//! the metric undefined and is reported as a `DegenerateMetric` error,
//! never as a fabricated number.

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::Forecast;

/// Pair up ground truth and prediction values on their shared dates.
///
/// Both indices are sorted, so a single two-pointer pass suffices.
/// Errors with `MisalignedSeries` when the indices do not intersect.
pub fn align(ground_truth: &TimeSeries, prediction: &Forecast) -> Result<(Vec<f64>, Vec<f64>)> {
    let truth_dates = ground_truth.timestamps();
    let pred_dates = prediction.timestamps();

    let mut actual = Vec::new();
    let mut predicted = Vec::new();

    let (mut i, mut j) = (0, 0);
    while i < truth_dates.len() && j < pred_dates.len() {
        match truth_dates[i].cmp(&pred_dates[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                actual.push(ground_truth.values()[i]);
                predicted.push(prediction.values()[j]);
                i += 1;
                j += 1;
            }
        }
    }

    if actual.is_empty() {
        return Err(ForecastError::MisalignedSeries(
            "Ground truth and prediction have no overlapping periods".to_string(),
        ));
    }

    Ok((actual, predicted))
}

fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Mean Absolute Percentage Error over the aligned window.
///
/// Undefined when any aligned actual is exactly zero. Fractional scale:
/// 0.05 means a 5% average deviation.
pub fn mape(ground_truth: &TimeSeries, prediction: &Forecast) -> Result<f64> {
    let (actual, predicted) = align(ground_truth, prediction)?;

    if actual.iter().any(|&a| a == 0.0) {
        return Err(ForecastError::DegenerateMetric(
            "MAPE is undefined when an actual value is zero".to_string(),
        ));
    }

    let total: f64 = actual
        .iter()
        .zip(&predicted)
        .map(|(a, p)| (a - p).abs() / a.abs())
        .sum();

    Ok(total / actual.len() as f64)
}

/// Symmetric Mean Absolute Percentage Error over the aligned window.
///
/// Undefined when actual and predicted are both zero at some point.
pub fn smape(ground_truth: &TimeSeries, prediction: &Forecast) -> Result<f64> {
    let (actual, predicted) = align(ground_truth, prediction)?;

    if actual
        .iter()
        .zip(&predicted)
        .any(|(&a, &p)| a == 0.0 && p == 0.0)
    {
        return Err(ForecastError::DegenerateMetric(
            "SMAPE is undefined when actual and predicted are both zero".to_string(),
        ));
    }

    let total: f64 = actual
        .iter()
        .zip(&predicted)
        .map(|(a, p)| (a - p).abs() / ((a.abs() + p.abs()) / 2.0))
        .sum();

    Ok(total / actual.len() as f64)
}

/// Mean Absolute Scaled Error over the aligned window.
///
/// The prediction's MAE is scaled by the in-sample MAE of the seasonal
/// naive benchmark on `history` (absolute differences at lag
/// `seasonality`). MASE < 1 means the forecast beats that benchmark.
/// Undefined when the history is perfectly seasonally periodic.
pub fn mase(
    ground_truth: &TimeSeries,
    prediction: &Forecast,
    history: &TimeSeries,
    seasonality: usize,
) -> Result<f64> {
    if seasonality == 0 {
        return Err(ForecastError::InvalidParameter(
            "Seasonality must be at least 1".to_string(),
        ));
    }

    let train = history.values();
    if train.len() <= seasonality {
        return Err(ForecastError::InsufficientHistory(format!(
            "MASE needs more than {} historical observations, got {}",
            seasonality,
            train.len()
        )));
    }

    let (actual, predicted) = align(ground_truth, prediction)?;

    let naive_total: f64 = train
        .iter()
        .skip(seasonality)
        .zip(train.iter())
        .map(|(curr, prev)| (curr - prev).abs())
        .sum();
    let naive_mae = naive_total / (train.len() - seasonality) as f64;

    if naive_mae < 1e-15 {
        return Err(ForecastError::DegenerateMetric(
            "MASE is undefined for a perfectly seasonal history".to_string(),
        ));
    }

    Ok(mean_absolute_error(&actual, &predicted) / naive_mae)
}
