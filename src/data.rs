//! Time series data handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};
use std::path::Path;

/// A univariate time series on a regular date index.
///
/// Timestamps are strictly increasing and gap-free at a fixed frequency.
/// The frequency is inferred once from the first two observations and
/// trusted afterwards; callers are responsible for supplying a regular
/// index.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Observation dates, strictly increasing
    timestamps: Vec<NaiveDate>,
    /// Observed values, one per timestamp
    values: Vec<f64>,
    /// Spacing between consecutive observations
    frequency: Duration,
}

impl TimeSeries {
    /// Create a new time series from parallel timestamp and value vectors.
    ///
    /// Requires at least two observations so the frequency can be
    /// inferred. Timestamps must be strictly increasing.
    pub fn new(timestamps: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Timestamp count ({}) doesn't match value count ({})",
                timestamps.len(),
                values.len()
            )));
        }
        if timestamps.len() < 2 {
            return Err(ForecastError::DataError(
                "A time series needs at least 2 observations".to_string(),
            ));
        }
        for pair in timestamps.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ForecastError::DataError(format!(
                    "Timestamps must be strictly increasing, found {} after {}",
                    pair[1], pair[0]
                )));
            }
        }

        let frequency = timestamps[1].signed_duration_since(timestamps[0]);

        Ok(Self {
            timestamps,
            values,
            frequency,
        })
    }

    /// Load a time series from a two-column CSV file (`date,value`)
    /// with a header row and ISO 8601 dates.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let mut timestamps = Vec::new();
        let mut values = Vec::new();

        for record in reader.records() {
            let record = record?;
            let date_field = record.get(0).ok_or_else(|| {
                ForecastError::DataError("Missing date column in CSV record".to_string())
            })?;
            let value_field = record.get(1).ok_or_else(|| {
                ForecastError::DataError("Missing value column in CSV record".to_string())
            })?;

            let date: NaiveDate = date_field.parse().map_err(|_| {
                ForecastError::DataError(format!("Cannot parse date '{}'", date_field))
            })?;
            let value: f64 = value_field.parse().map_err(|_| {
                ForecastError::DataError(format!("Cannot parse value '{}'", value_field))
            })?;

            timestamps.push(date);
            values.push(value);
        }

        Self::new(timestamps, values)
    }

    /// Build a sub-series that keeps the parent's frequency.
    fn subset(&self, range: std::ops::Range<usize>) -> Result<Self> {
        if range.is_empty() {
            return Err(ForecastError::DataError(
                "Slice selects no observations".to_string(),
            ));
        }
        Ok(Self {
            timestamps: self.timestamps[range.clone()].to_vec(),
            values: self.values[range].to_vec(),
            frequency: self.frequency,
        })
    }

    /// All observations up to and including `date`.
    pub fn up_to(&self, date: NaiveDate) -> Result<Self> {
        let end = self.timestamps.partition_point(|&t| t <= date);
        self.subset(0..end)
    }

    /// All observations strictly after `date`.
    pub fn after(&self, date: NaiveDate) -> Result<Self> {
        let start = self.timestamps.partition_point(|&t| t <= date);
        self.subset(start..self.len())
    }

    /// Generate `horizon` consecutive dates starting one period after
    /// the last observation.
    pub fn future_timestamps(&self, horizon: usize) -> Vec<NaiveDate> {
        let last = self.last_timestamp();
        (1..=horizon)
            .map(|i| last + self.frequency * i as i32)
            .collect()
    }

    /// Get the observation dates
    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    /// Get the observed values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Date of the last observation
    pub fn last_timestamp(&self) -> NaiveDate {
        *self.timestamps.last().unwrap()
    }

    /// Spacing between consecutive observations
    pub fn frequency(&self) -> Duration {
        self.frequency
    }

    /// Get the length of the time series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the time series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Calculate the mean of the values
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}
