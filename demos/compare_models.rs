use chrono::NaiveDate;
use trend_forecast::config::ForecastConfig;
use trend_forecast::evaluation::evaluate;
use trend_forecast::models::exponential_smoothing::ExponentialSmoothing;
use trend_forecast::models::seasonal_naive::SeasonalNaive;
use trend_forecast::models::{ForecastModel, TrainedForecastModel};
use trend_forecast::report::write_metrics_csv;
use trend_forecast::utils::{synthetic_weekly_series, train_test_split_at};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Trend Forecast: Baseline Model Comparison");
    println!("=========================================\n");

    let config = ForecastConfig::default();

    // Three years of weekly data, hold out the final year
    println!("Generating sample data...");
    let start = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
    let series = synthetic_weekly_series(156, start, 7)?;
    let split_date = series.timestamps()[103];
    let (history, truth) = train_test_split_at(&series, split_date)?;

    println!(
        "Sample data created: {} training weeks, {} held-out weeks\n",
        history.len(),
        truth.len()
    );

    // Fit both baselines and forecast one year ahead
    println!("Training models...");
    let ets_model = ExponentialSmoothing::new(config.season_length)?;
    let ets_forecast = ets_model.train(&history)?.forecast(config.horizon)?;

    let snaive_model = SeasonalNaive::new(config.season_length)?;
    let snaive_forecast = snaive_model.train(&history)?.forecast(config.horizon)?;

    println!("Models trained successfully\n");

    // Score both forecasts against the held-out year
    let predictions = vec![
        ("Exp. Smooth.".to_string(), ets_forecast),
        ("Snaive".to_string(), snaive_forecast),
    ];
    let table = evaluate(&history, &truth, &predictions, config.season_length)?;

    println!("Error metrics (worst MASE first):\n");
    println!("{table}");

    write_metrics_csv(&table, "error_metrics.csv")?;
    println!("Report written to error_metrics.csv");

    Ok(())
}
