//! Utility functions for the trend_forecast crate

use crate::data::TimeSeries;
use crate::error::Result;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Split a series into train and test parts at a date.
///
/// The training part includes `date` (mirroring an inclusive label
/// slice); the test part starts strictly after it.
pub fn train_test_split_at(
    series: &TimeSeries,
    date: NaiveDate,
) -> Result<(TimeSeries, TimeSeries)> {
    let train = series.up_to(date)?;
    let test = series.after(date)?;
    Ok((train, test))
}

/// Generate a deterministic weekly series: yearly sine cycle plus a
/// mild upward trend plus Gaussian noise. Useful for demos and
/// end-to-end tests where real data is not available.
pub fn synthetic_weekly_series(n_weeks: usize, start: NaiveDate, seed: u64) -> Result<TimeSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).expect("valid normal parameters");

    let timestamps: Vec<NaiveDate> = (0..n_weeks)
        .map(|w| start + chrono::Duration::weeks(w as i64))
        .collect();

    let values: Vec<f64> = (0..n_weeks)
        .map(|w| {
            let t = w as f64;
            let cycle = (2.0 * std::f64::consts::PI * t / 52.0).sin();
            100.0 + 0.2 * t + 10.0 * cycle + noise.sample(&mut rng)
        })
        .collect();

    TimeSeries::new(timestamps, values)
}
