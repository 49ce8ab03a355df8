//! Error types for the trend_forecast crate

use thiserror::Error;

/// Custom error types for the trend_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The history is too short for the requested season length or model fit
    #[error("insufficient history: {0}")]
    InsufficientHistory(String),

    /// Model fitting failed (non-convergence or degenerate input)
    #[error("model fit failure: {0}")]
    ModelFitFailure(String),

    /// Ground truth and prediction share no overlapping timestamps
    #[error("misaligned series: {0}")]
    MisalignedSeries(String),

    /// A metric denominator is zero, the value cannot be computed
    #[error("degenerate metric: {0}")]
    DegenerateMetric(String),

    /// Error from invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or processing
    #[error("data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing or writing
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
