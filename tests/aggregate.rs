#[path = "common/mod.rs"]
mod common;

use common::*;
use decision_days::{
    daily_counts, extract_records, release_day_frequency, status_counts, weekday_summary, ResponseTable,
};
use time::macros::date;
use time::{Duration, Weekday};

fn sample_table() -> ResponseTable {
    ResponseTable::from_records(extract_records(&sample_comments()))
}

#[test]
fn unparsable_dates_stay_in_table() {
    let table = sample_table();
    assert_eq!(table.len(), 6);
    assert_eq!(table.dated().count(), 5);
    assert_eq!(table.rows[5].decision_date_parsed, None);
}

/// 2022-04-05 ..= 2022-04-27 is 23 days, each present exactly once, no gaps.
#[test]
fn daily_series_is_contiguous_and_zero_filled() {
    let daily = daily_counts(&sample_table());
    assert_eq!(daily.len(), 23);
    assert_eq!(daily.first().unwrap().date, date!(2022 - 04 - 05));
    assert_eq!(daily.last().unwrap().date, date!(2022 - 04 - 27));
    for pair in daily.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }

    let count_on = |d: time::Date| daily.iter().find(|x| x.date == d).map(|x| x.responses);
    assert_eq!(count_on(date!(2022 - 04 - 05)), Some(1));
    assert_eq!(count_on(date!(2022 - 04 - 06)), Some(2));
    assert_eq!(count_on(date!(2022 - 04 - 07)), Some(0));
    assert_eq!(count_on(date!(2022 - 04 - 08)), Some(1));
    assert_eq!(count_on(date!(2022 - 04 - 27)), Some(1));
    assert_eq!(daily.iter().map(|d| d.responses).sum::<u64>(), 5);
}

#[test]
fn daily_series_empty_without_dates() {
    let table = ResponseTable::from_records(extract_records(&[decision_days::RawComment::with_body(
        report_body("whenever", "Accepted"),
    )]));
    assert!(daily_counts(&table).is_empty());
    assert!(weekday_summary(&table).is_empty());
    assert_eq!(status_counts(&table).len(), 1);
}

#[test]
fn weekday_percentages_sum_to_hundred() {
    let weekdays = weekday_summary(&sample_table());
    let got: Vec<(Weekday, u64, f64)> = weekdays.iter().map(|w| (w.weekday, w.responses, w.pct_of_total)).collect();
    assert_eq!(
        got,
        vec![
            (Weekday::Tuesday, 1, 20.0),
            (Weekday::Wednesday, 3, 60.0),
            (Weekday::Friday, 1, 20.0),
        ]
    );
    let total: f64 = weekdays.iter().map(|w| w.pct_of_total).sum();
    assert!((total - 100.0).abs() < 0.05);
}

/// Release-day frequency counts distinct days, not responses: the two
/// responses on 2022-04-06 count once.
#[test]
fn release_days_count_distinct_days() {
    let freq = release_day_frequency(&sample_table(), &[Weekday::Tuesday]);
    let got: Vec<(Weekday, u8, u64, f64)> = freq
        .iter()
        .map(|f| (f.weekday, f.day_of_week_number, f.frequency, f.pct_occurrence))
        .collect();
    assert_eq!(
        got,
        vec![(Weekday::Wednesday, 2, 2, 66.67), (Weekday::Friday, 4, 1, 33.33)]
    );
}

#[test]
fn excluding_a_weekday_never_increases_its_day_count() {
    let table = sample_table();
    let daily = daily_counts(&table);
    let unfiltered = release_day_frequency(&table, &[]);
    let filtered = release_day_frequency(&table, &[Weekday::Tuesday]);

    let days_with_responses = |wd: Weekday| daily.iter().filter(|d| d.weekday == wd && d.responses > 0).count() as u64;
    let freq_of = |v: &[decision_days::ReleaseDayFrequency], wd: Weekday| {
        v.iter().find(|f| f.weekday == wd).map(|f| f.frequency).unwrap_or(0)
    };

    for wd in [Weekday::Tuesday, Weekday::Wednesday, Weekday::Friday] {
        assert_eq!(freq_of(&unfiltered, wd), days_with_responses(wd));
        assert!(freq_of(&filtered, wd) <= days_with_responses(wd));
    }
    assert_eq!(freq_of(&filtered, Weekday::Tuesday), 0);
}

#[test]
fn status_counts_include_undated_rows() {
    let statuses = status_counts(&sample_table());
    let got: Vec<(&str, u64)> = statuses.iter().map(|s| (s.status.as_str(), s.responses)).collect();
    assert_eq!(
        got,
        vec![("accepted", 3), ("rejected", 1), ("unknown", 1), ("waitlisted", 1)]
    );
}
