//! Forecast configuration shared by all models

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Number of weekly periods in one seasonal cycle.
pub const WEEKS_IN_YEAR: usize = 52;

/// Default forecast horizon: one year ahead.
pub const PREDICTION_ONE_YEAR: usize = 52;

/// Seasonality and horizon settings supplied to the forecasters.
///
/// Both values are externally configurable; models never assume a
/// particular cycle length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of periods per seasonal cycle
    #[serde(default = "default_season_length")]
    pub season_length: usize,

    /// Number of future periods to predict
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

fn default_season_length() -> usize {
    WEEKS_IN_YEAR
}

fn default_horizon() -> usize {
    PREDICTION_ONE_YEAR
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            season_length: default_season_length(),
            horizon: default_horizon(),
        }
    }
}

impl ForecastConfig {
    /// Create a validated configuration.
    pub fn new(season_length: usize, horizon: usize) -> Result<Self> {
        let config = Self {
            season_length,
            horizon,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both settings are at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.season_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "season_length must be at least 1".to_string(),
            ));
        }
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
