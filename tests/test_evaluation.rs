use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use trend_forecast::data::TimeSeries;
use trend_forecast::error::ForecastError;
use trend_forecast::evaluation::{evaluate, format_metric};
use trend_forecast::models::Forecast;

fn weekly_dates(offset_weeks: i64, n: usize) -> Vec<NaiveDate> {
    let start: NaiveDate = "2023-01-02".parse().unwrap();
    (0..n)
        .map(|i| start + Duration::weeks(offset_weeks + i as i64))
        .collect()
}

fn series(offset_weeks: i64, values: Vec<f64>) -> TimeSeries {
    TimeSeries::new(weekly_dates(offset_weeks, values.len()), values).unwrap()
}

fn forecast(offset_weeks: i64, values: Vec<f64>) -> Forecast {
    Forecast::new(values.clone(), weekly_dates(offset_weeks, values.len())).unwrap()
}

fn fixture() -> (TimeSeries, TimeSeries) {
    // Lag-2 differences are all 2.0, so the MASE denominator is 2.0
    let history = series(-8, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let truth = series(0, vec![10.0, 20.0, 30.0, 40.0]);
    (history, truth)
}

#[test]
fn test_rows_sorted_by_mase_descending() {
    let (history, truth) = fixture();

    // Constant offsets give MASE 0.5 (A), 1.2 (B) and 0.8 (C)
    let predictions = vec![
        ("A".to_string(), forecast(0, vec![11.0, 21.0, 31.0, 41.0])),
        ("B".to_string(), forecast(0, vec![12.4, 22.4, 32.4, 42.4])),
        ("C".to_string(), forecast(0, vec![11.6, 21.6, 31.6, 41.6])),
    ];

    let table = evaluate(&history, &truth, &predictions, 2).unwrap();

    assert_eq!(table.model_order(), vec!["B", "C", "A"]);
    let mases: Vec<f64> = table.rows().iter().map(|r| r.mase.unwrap()).collect();
    assert!((mases[0] - 1.2).abs() < 1e-9);
    assert!((mases[1] - 0.8).abs() < 1e-9);
    assert!((mases[2] - 0.5).abs() < 1e-9);
}

#[test]
fn test_insertion_order_is_kept_for_ties() {
    let (history, truth) = fixture();
    let values = vec![11.0, 21.0, 31.0, 41.0];

    let predictions = vec![
        ("first".to_string(), forecast(0, values.clone())),
        ("second".to_string(), forecast(0, values)),
    ];

    let table = evaluate(&history, &truth, &predictions, 2).unwrap();
    assert_eq!(table.model_order(), vec!["first", "second"]);
}

#[test]
fn test_degenerate_mase_yields_undefined_cell() {
    // Perfectly seasonal history: MASE cannot be computed, the other
    // metrics still can
    let history = series(-8, vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
    let truth = series(0, vec![10.0, 20.0]);
    let predictions = vec![("Snaive".to_string(), forecast(0, vec![11.0, 19.0]))];

    let table = evaluate(&history, &truth, &predictions, 2).unwrap();

    let row = &table.rows()[0];
    assert!(row.mase.is_none());
    assert!(row.mape.is_some());
    assert!(row.smape.is_some());
}

#[test]
fn test_all_undefined_mase_rows_keep_order() {
    // Perfectly seasonal history makes MASE undefined for every model;
    // with nothing to rank by, insertion order is preserved
    let history = series(-8, vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
    let truth = series(0, vec![10.0, 20.0]);

    let predictions = vec![
        ("undefined".to_string(), forecast(0, vec![11.0, 19.0])),
        ("also-undefined".to_string(), forecast(0, vec![12.0, 18.0])),
    ];

    let table = evaluate(&history, &truth, &predictions, 2).unwrap();
    assert_eq!(table.model_order(), vec!["undefined", "also-undefined"]);
}

#[test]
fn test_misaligned_prediction_aborts_evaluation() {
    let (history, truth) = fixture();
    let predictions = vec![("far".to_string(), forecast(20, vec![1.0, 2.0]))];

    let result = evaluate(&history, &truth, &predictions, 2);
    assert!(matches!(result, Err(ForecastError::MisalignedSeries(_))));
}

#[test]
fn test_metric_formatting() {
    assert_eq!(format_metric(Some(0.123456)), "0.1235");
    assert_eq!(format_metric(Some(2.0)), "2.0000");
    assert_eq!(format_metric(None), "NaN");
}

#[test]
fn test_table_display_lists_all_models() {
    let (history, truth) = fixture();
    let predictions = vec![
        ("Exp. Smooth.".to_string(), forecast(0, vec![11.0, 21.0, 31.0, 41.0])),
        ("Snaive".to_string(), forecast(0, vec![12.0, 22.0, 32.0, 42.0])),
    ];

    let table = evaluate(&history, &truth, &predictions, 2).unwrap();
    let rendered = table.to_string();

    assert!(rendered.contains("model"));
    assert!(rendered.contains("Exp. Smooth."));
    assert!(rendered.contains("Snaive"));
}
