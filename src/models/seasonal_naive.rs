//! Seasonal naive model: repeats the last seasonal cycle as its forecast

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{Forecast, ForecastModel, TrainedForecastModel};
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Seasonal naive forecasting model
#[derive(Debug, Clone)]
pub struct SeasonalNaive {
    /// Name of the model
    name: String,
    /// Number of periods per seasonal cycle
    season_length: usize,
}

/// Trained seasonal naive model
#[derive(Debug, Clone)]
pub struct TrainedSeasonalNaive {
    /// Name of the model
    name: String,
    /// Last full seasonal cycle of the history, oldest first
    window: Vec<f64>,
    /// Date of the last historical observation
    last_timestamp: NaiveDate,
    /// Spacing of the historical index
    frequency: Duration,
}

impl SeasonalNaive {
    /// Create a new seasonal naive model
    pub fn new(season_length: usize) -> Result<Self> {
        if season_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "Season length must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Seasonal Naive (season={})", season_length),
            season_length,
        })
    }
}

impl ForecastModel for SeasonalNaive {
    type Trained = TrainedSeasonalNaive;

    fn train(&self, history: &TimeSeries) -> Result<Self::Trained> {
        let values = history.values();
        if values.len() < self.season_length {
            return Err(ForecastError::InsufficientHistory(format!(
                "Seasonal naive needs at least {} observations, got {}",
                self.season_length,
                values.len()
            )));
        }

        let window = values[values.len() - self.season_length..].to_vec();

        debug!(
            season_length = self.season_length,
            history_len = values.len(),
            "seasonal naive captured last cycle"
        );

        Ok(TrainedSeasonalNaive {
            name: self.name.clone(),
            window,
            last_timestamp: history.last_timestamp(),
            frequency: history.frequency(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedSeasonalNaive {
    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least 1".to_string(),
            ));
        }

        // Tile the captured cycle across the horizon: whole copies of
        // the window, then a leading partial copy when the horizon is
        // not a multiple of the season length. At horizon == season
        // this is a single exact copy.
        let values: Vec<f64> = (0..horizon).map(|i| self.window[i % self.window.len()]).collect();

        let timestamps: Vec<NaiveDate> = (1..=horizon)
            .map(|i| self.last_timestamp + self.frequency * i as i32)
            .collect();

        Forecast::new(values, timestamps)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
