//! # Trend Forecast
//!
//! A Rust library for weekly time series forecasting and baseline model
//! evaluation.
//!
//! ## Features
//!
//! - Time series data handling on a regular date index
//! - Baseline forecasting models (additive Holt-Winters exponential
//!   smoothing, seasonal naive)
//! - Accuracy metrics (MASE, MAPE, SMAPE) over the aligned evaluation
//!   window
//! - Model comparison tables ranked worst-to-best by MASE, with a CSV
//!   report sink
//!
//! ## Quick Start
//!
//! ```no_run
//! use trend_forecast::config::ForecastConfig;
//! use trend_forecast::data::TimeSeries;
//! use trend_forecast::evaluation::evaluate;
//! use trend_forecast::models::exponential_smoothing::ExponentialSmoothing;
//! use trend_forecast::models::seasonal_naive::SeasonalNaive;
//! use trend_forecast::models::{ForecastModel, TrainedForecastModel};
//!
//! # fn main() -> trend_forecast::error::Result<()> {
//! let config = ForecastConfig::default();
//!
//! // Load data and hold out the last year as ground truth
//! let series = TimeSeries::from_csv("chunky_sneakers.csv")?;
//! let split = "2023-01-01".parse().unwrap();
//! let history = series.up_to(split)?;
//! let truth = series.after(split)?;
//!
//! // Fit both baselines and forecast one year ahead
//! let ets = ExponentialSmoothing::new(config.season_length)?
//!     .train(&history)?
//!     .forecast(config.horizon)?;
//! let snaive = SeasonalNaive::new(config.season_length)?
//!     .train(&history)?
//!     .forecast(config.horizon)?;
//!
//! // Rank the models, worst MASE first
//! let predictions = vec![
//!     ("Exp. Smooth.".to_string(), ets),
//!     ("Snaive".to_string(), snaive),
//! ];
//! let table = evaluate(&history, &truth, &predictions, config.season_length)?;
//! println!("{table}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::TimeSeries;
pub use crate::error::ForecastError;
pub use crate::evaluation::{evaluate, MetricRow, MetricsTable};
pub use crate::models::{Forecast, ForecastModel, TrainedForecastModel};
pub use crate::report::write_metrics_csv;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
