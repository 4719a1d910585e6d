//! Reducers over the response table: daily series, weekday shares, release-day
//! frequency and status counts. Rows without a parsed date only count toward
//! status totals.

use crate::date::{iter_days, weekday_number};
use crate::table::ResponseTable;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use time::{Date, Weekday};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: Date,
    pub weekday: Weekday,
    pub responses: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeekdaySummary {
    pub weekday: Weekday,
    pub day_of_week_number: u8,
    pub responses: u64,
    pub pct_of_total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReleaseDayFrequency {
    pub weekday: Weekday,
    pub day_of_week_number: u8,
    pub frequency: u64,
    pub pct_occurrence: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub responses: u64,
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn pct(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(part as f64 / total as f64 * 100.0)
    }
}

/// Responses per parsed date.
pub fn count_by_date(table: &ResponseTable) -> BTreeMap<Date, u64> {
    let mut m = BTreeMap::<Date, u64>::new();
    for (d, _) in table.dated() {
        *m.entry(d).or_insert(0) += 1;
    }
    m
}

/// One entry per day from the earliest to the latest parsed date, zero-filled.
pub fn daily_counts(table: &ResponseTable) -> Vec<DailyCount> {
    let counts = count_by_date(table);
    let (Some((&start, _)), Some((&end, _))) = (counts.first_key_value(), counts.last_key_value()) else {
        return Vec::new();
    };
    iter_days(start, end)
        .map(|date| DailyCount {
            date,
            weekday: date.weekday(),
            responses: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Responses per weekday, ordered Monday first.
pub fn weekday_summary(table: &ResponseTable) -> Vec<WeekdaySummary> {
    let mut m = BTreeMap::<u8, (Weekday, u64)>::new();
    for (_, day) in table.dated() {
        m.entry(weekday_number(day)).or_insert((day, 0)).1 += 1;
    }
    let total: u64 = m.values().map(|(_, n)| n).sum();
    m.into_iter()
        .map(|(num, (weekday, responses))| WeekdaySummary {
            weekday,
            day_of_week_number: num,
            responses,
            pct_of_total: pct(responses, total),
        })
        .collect()
}

/// Distinct decision days per weekday, ignoring `excluded` weekdays.
pub fn release_day_frequency(table: &ResponseTable, excluded: &[Weekday]) -> Vec<ReleaseDayFrequency> {
    // The weekday is a function of the date, so distinct dates are distinct (date, weekday) pairs.
    let days: BTreeSet<Date> = table
        .dated()
        .filter(|(_, day)| !excluded.contains(day))
        .map(|(d, _)| d)
        .collect();

    let mut m = BTreeMap::<u8, (Weekday, u64)>::new();
    for d in days {
        let day = d.weekday();
        m.entry(weekday_number(day)).or_insert((day, 0)).1 += 1;
    }
    let total: u64 = m.values().map(|(_, n)| n).sum();
    m.into_iter()
        .map(|(num, (weekday, frequency))| ReleaseDayFrequency {
            weekday,
            day_of_week_number: num,
            frequency,
            pct_occurrence: pct(frequency, total),
        })
        .collect()
}

/// Responses per cleaned status over every row, sorted by status.
pub fn status_counts(table: &ResponseTable) -> Vec<StatusCount> {
    let mut m = BTreeMap::<&str, u64>::new();
    for r in &table.rows {
        *m.entry(r.status_cleaned.as_str()).or_insert(0) += 1;
    }
    m.into_iter()
        .map(|(status, responses)| StatusCount { status: status.to_string(), responses })
        .collect()
}
