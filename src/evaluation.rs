//! Evaluation driver: score every model's forecast and rank the results

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::metrics::{mape, mase, smape};
use crate::models::Forecast;
use serde::Serialize;

/// Metric scores for a single model
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    /// Model name
    pub model: String,
    /// Mean Absolute Scaled Error, `None` when undefined
    pub mase: Option<f64>,
    /// Mean Absolute Percentage Error, `None` when undefined
    pub mape: Option<f64>,
    /// Symmetric Mean Absolute Percentage Error, `None` when undefined
    pub smape: Option<f64>,
}

/// Comparison table with one row per model, sorted worst-first by MASE
#[derive(Debug, Clone)]
pub struct MetricsTable {
    rows: Vec<MetricRow>,
}

impl MetricsTable {
    /// Get the table rows
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    /// Model names in table order
    pub fn model_order(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.model.as_str()).collect()
    }
}

impl std::fmt::Display for MetricsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<24} {:>10} {:>10} {:>10}", "model", "mase", "mape", "smape")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<24} {:>10} {:>10} {:>10}",
                row.model,
                format_metric(row.mase),
                format_metric(row.mape),
                format_metric(row.smape),
            )?;
        }
        Ok(())
    }
}

/// Render a metric value rounded to 4 decimals, `NaN` when undefined.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "NaN".to_string(),
    }
}

/// A degenerate metric becomes an undefined cell; any other failure
/// aborts the evaluation.
fn defined_or_none(outcome: Result<f64>) -> Result<Option<f64>> {
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(ForecastError::DegenerateMetric(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Score each named forecast against the ground truth and rank the rows.
///
/// `predictions` is an ordered association list, so the pre-sort row
/// order is deterministic. `history` is the in-sample training series
/// MASE scales against. Rows are sorted by MASE descending — worst
/// model first, so the table reads as a ranking of what to discard —
/// with undefined MASE rows placed last.
pub fn evaluate(
    history: &TimeSeries,
    ground_truth: &TimeSeries,
    predictions: &[(String, Forecast)],
    seasonality: usize,
) -> Result<MetricsTable> {
    let mut rows = Vec::with_capacity(predictions.len());

    for (name, forecast) in predictions {
        rows.push(MetricRow {
            model: name.clone(),
            mase: defined_or_none(mase(ground_truth, forecast, history, seasonality))?,
            mape: defined_or_none(mape(ground_truth, forecast))?,
            smape: defined_or_none(smape(ground_truth, forecast))?,
        });
    }

    rows.sort_by(|a, b| match (a.mase, b.mase) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    Ok(MetricsTable { rows })
}
