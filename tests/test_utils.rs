use chrono::{Duration, NaiveDate};
use trend_forecast::utils::{synthetic_weekly_series, train_test_split_at};

#[test]
fn test_synthetic_series_is_deterministic() {
    let start: NaiveDate = "2021-01-04".parse().unwrap();

    let a = synthetic_weekly_series(60, start, 7).unwrap();
    let b = synthetic_weekly_series(60, start, 7).unwrap();
    let c = synthetic_weekly_series(60, start, 8).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    assert_eq!(a.len(), 60);
    assert_eq!(a.frequency(), Duration::weeks(1));
    assert_eq!(a.timestamps()[0], start);
}

#[test]
fn test_synthetic_series_has_yearly_shape() {
    let start: NaiveDate = "2021-01-04".parse().unwrap();
    let series = synthetic_weekly_series(104, start, 3).unwrap();

    // Sine plus mild trend around a level of 100: values stay positive
    // and inside a loose band
    for &v in series.values() {
        assert!(v > 50.0 && v < 200.0);
    }
}

#[test]
fn test_train_test_split() {
    let start: NaiveDate = "2021-01-04".parse().unwrap();
    let series = synthetic_weekly_series(10, start, 1).unwrap();

    let split_date = series.timestamps()[6];
    let (train, test) = train_test_split_at(&series, split_date).unwrap();

    assert_eq!(train.len(), 7);
    assert_eq!(test.len(), 3);
    assert_eq!(train.last_timestamp(), split_date);
    assert_eq!(test.timestamps()[0], split_date + Duration::weeks(1));
}
