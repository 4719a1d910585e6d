use time::macros::format_description;
use time::{Date, Duration, Month, Weekday};

/// Parse a cleaned decision-date token.
/// Accepts `M/D/YYYY`, `M/D/YY` (read as 20YY), `M-D-YYYY` and `YYYY-M-D`.
/// Anything else is `None`; callers treat that as "date unknown".
pub fn parse_decision_date(token: &str) -> Option<Date> {
    let token = token.trim();
    let sep = if token.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = token.split(sep).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let (y, m, d) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else {
        (parts[2], parts[0], parts[1])
    };
    let year: i32 = match y.len() {
        2 => 2000 + y.parse::<i32>().ok()?,
        4 => y.parse().ok()?,
        _ => return None,
    };
    let month = Month::try_from(m.parse::<u8>().ok()?).ok()?;
    let day: u8 = d.parse().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// 0 = Monday .. 6 = Sunday.
pub fn weekday_number(day: Weekday) -> u8 {
    day.number_days_from_monday()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Case-insensitive weekday lookup; accepts full names and three-letter forms.
pub fn weekday_from_name(s: &str) -> Option<Weekday> {
    let s = s.trim().to_lowercase();
    let day = match s.get(..3)? {
        "mon" => Weekday::Monday,
        "tue" => Weekday::Tuesday,
        "wed" => Weekday::Wednesday,
        "thu" => Weekday::Thursday,
        "fri" => Weekday::Friday,
        "sat" => Weekday::Saturday,
        "sun" => Weekday::Sunday,
        _ => return None,
    };
    if s.len() == 3 || weekday_name(day).eq_ignore_ascii_case(&s) {
        Some(day)
    } else {
        None
    }
}

pub fn format_date(d: Date) -> String {
    d.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| d.to_string())
}

/// Inclusive iteration from `start` to `end` (if `start` <= `end`), else empty.
pub fn iter_days(start: Date, end: Date) -> impl Iterator<Item = Date> {
    let mut curr = if start <= end { Some(start) } else { None };
    std::iter::from_fn(move || {
        let ret = curr?;
        curr = ret.checked_add(Duration::days(1)).filter(|n| *n <= end);
        Some(ret)
    })
}
