//! Baseline forecasting models for weekly time series

use crate::data::TimeSeries;
use crate::error::Result;
use chrono::NaiveDate;
use std::fmt::Debug;

/// Forecast produced by a trained model.
///
/// Holds the predicted values together with their dates: `horizon`
/// consecutive periods immediately following the last historical
/// observation. A forecast is created fresh per call and owns its data.
#[derive(Debug, Clone)]
pub struct Forecast {
    /// Forecasted values
    values: Vec<f64>,
    /// Forecast dates, one per value
    timestamps: Vec<NaiveDate>,
}

impl Forecast {
    /// Create a new forecast from parallel value and date vectors.
    pub fn new(values: Vec<f64>, timestamps: Vec<NaiveDate>) -> Result<Self> {
        if values.len() != timestamps.len() {
            return Err(crate::error::ForecastError::DataError(format!(
                "Values length ({}) doesn't match timestamps length ({})",
                values.len(),
                timestamps.len()
            )));
        }
        if values.is_empty() {
            return Err(crate::error::ForecastError::DataError(
                "A forecast needs at least one period".to_string(),
            ));
        }

        Ok(Self { values, timestamps })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the forecast dates
    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// View the forecast as a plain time series, e.g. for plotting
    /// alongside the historical data.
    pub fn to_series(&self) -> Result<TimeSeries> {
        TimeSeries::new(self.timestamps.clone(), self.values.clone())
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate a forecast for the next `horizon` periods after the
    /// training history.
    fn forecast(&self, horizon: usize) -> Result<Forecast>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on time series data
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on historical data
    fn train(&self, history: &TimeSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod exponential_smoothing;
pub mod seasonal_naive;
