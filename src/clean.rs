//! Normalization of scraped decision dates and statuses.
//! Nothing here fails: bad input degrades to `None` or `"unknown"`.

use crate::date::{parse_decision_date, weekday_number};
use regex::Regex;
use std::sync::OnceLock;
use time::{Date, Weekday};

pub const UNKNOWN_STATUS: &str = "unknown";

/// Exact-token fixes for dates whose year is only known from context.
pub const DATE_OVERRIDES: &[(&str, &str)] = &[("4/27", "4/27/2022")];

fn html_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("static regex"))
}

fn zero_pad_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|\D)0(\d)").expect("static regex"))
}

fn bracketed_status_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[<(.+?)>\].*").expect("static regex"))
}

/// Step 1: strip markup noise, `May` -> `5`, collapse zero-padded components, trim.
/// Tags like `<br>` go entirely; template brackets around a value (`<4/6/2022>`,
/// `[<4/6/2022>]`) are dropped and the value kept.
pub fn scrub_decision_date(raw: &str) -> String {
    let s = html_tag_re().replace_all(raw, "");
    let s: String = s
        .chars()
        .filter(|c| !matches!(c, '\r' | '\\' | '<' | '>' | '[' | ']'))
        .collect();
    let s = s.replace("May", "5");
    let s = zero_pad_re().replace_all(&s, "${1}${2}");
    s.trim().to_string()
}

/// Step 3: apply `DATE_OVERRIDES` to an exact token.
pub fn apply_date_override(token: &str) -> &str {
    DATE_OVERRIDES
        .iter()
        .find(|(from, _)| *from == token)
        .map(|(_, to)| *to)
        .unwrap_or(token)
}

/// All derived decision-date columns for one raw value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanedDate {
    pub scrubbed: String,
    pub token: String,
    pub date: Option<Date>,
    pub weekday: Option<Weekday>,
    pub weekday_number: Option<u8>,
}

pub fn clean_decision_date(raw: &str) -> CleanedDate {
    let scrubbed = scrub_decision_date(raw);
    let first = scrubbed.split_whitespace().next().unwrap_or("");
    let token = apply_date_override(first).to_string();
    let date = parse_decision_date(&token);
    let weekday = date.map(|d| d.weekday());
    CleanedDate {
        scrubbed,
        token,
        date,
        weekday,
        weekday_number: weekday.map(weekday_number),
    }
}

pub fn clean_status(raw: &str) -> String {
    let s: String = raw
        .chars()
        .filter(|c| !matches!(c, '\r' | '\\' | '<' | '>' | '[' | ']'))
        .collect();
    let s = s.trim().to_lowercase();
    let first: String = s
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| !matches!(c, '\\' | '!'))
        .collect();
    let out = bracketed_status_re().replace_all(&first, "${1}");
    if out.is_empty() {
        UNKNOWN_STATUS.to_string()
    } else {
        out.into_owned()
    }
}
