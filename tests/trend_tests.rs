use chrono::NaiveDate;
use scope::core::trend::TrendView;
use scope::models::{HelpStatus, LogRecord, Mood};
use scope::utils::date::parse_day_first;

fn record(ts: &str, probability: f64) -> LogRecord {
    LogRecord {
        timestamp: ts.to_string(),
        mood: Mood::Sad,
        help_status: HelpStatus::No,
        entry: "entry".to_string(),
        probability,
        prediction: "Control-like".to_string(),
    }
}

#[test]
fn test_drops_unparsable_and_sorts_ascending() {
    let records = vec![
        record("2024-02-01 10:00:00", 50.0),
        record("2024-01-15 09:00:00", 20.0),
        record("not-a-date", 99.0),
    ];

    let view = TrendView::from_records(&records);
    let points = view.points();

    assert_eq!(points.len(), 2);
    assert_eq!(
        points[0].timestamp.date(),
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
    assert_eq!(points[0].probability, 20.0);
    assert_eq!(
        points[1].timestamp.date(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
    assert_eq!(points[1].probability, 50.0);
}

#[test]
fn test_day_first_dates() {
    let dt = parse_day_first("03/04/2024 08:30:00").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());

    let d = parse_day_first("15-01-2024").unwrap();
    assert_eq!(d.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    // ISO stays year-month-day
    let iso = parse_day_first("2024-02-01 10:00:00").unwrap();
    assert_eq!(iso.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    assert!(parse_day_first("31/31/2024").is_none());
    assert!(parse_day_first("").is_none());
}

#[test]
fn test_equal_timestamps_keep_log_order() {
    let records = vec![
        record("2024-01-01 10:00:00", 1.0),
        record("2024-01-01 10:00:00", 2.0),
        record("2023-12-31 10:00:00", 3.0),
    ];

    let view = TrendView::from_records(&records);
    let probs: Vec<f64> = view.points().iter().map(|p| p.probability).collect();

    assert_eq!(probs, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_empty_log_is_no_data() {
    let view = TrendView::from_records(&[]);
    assert!(view.is_empty());
    assert_eq!(view.render(40, 8), "");

    let only_bad = TrendView::from_records(&[record("??", 10.0)]);
    assert!(only_bad.is_empty());
}

#[test]
fn test_render_draws_columns_and_axis() {
    let records = vec![
        record("2024-01-01 10:00:00", 100.0),
        record("2024-01-02 10:00:00", 0.0),
        record("2024-01-03 10:00:00", 50.0),
    ];

    let chart = TrendView::from_records(&records).render(40, 4);
    let lines: Vec<&str> = chart.lines().collect();

    // 4 rows + axis + date labels
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("100 ┤"));
    assert!(lines[0].ends_with("█  "));
    assert!(lines[3].ends_with("█ █"));
    assert!(lines[5].contains("2024-01-01"));
    assert!(lines[5].contains("2024-01-03"));
}

#[test]
fn test_render_buckets_when_narrow() {
    let records: Vec<LogRecord> = (1..=20)
        .map(|d| record(&format!("2024-01-{d:02} 10:00:00"), 100.0))
        .collect();

    let chart = TrendView::from_records(&records).render(5, 2);
    let top = chart.lines().next().unwrap();

    assert_eq!(top.chars().filter(|c| *c == '█').count(), 5);
}
