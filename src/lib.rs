mod config;
mod date;
mod fetch;
mod json_utils;
mod extract;
mod clean;
mod table;
mod aggregate;
mod report;
mod util;
mod pipeline;

pub use crate::config::{AnalysisOptions, Credentials, DEFAULT_SUBREDDIT, DEFAULT_THREAD_ID};
pub use crate::pipeline::{AnalysisReport, DecisionAnalysis};
pub use crate::fetch::{CommentSource, RedditClient};

// Listing parsing, usable without a network client.
pub use crate::json_utils::{comments_listing, flatten_comment_listing, RawComment};

pub use crate::extract::{
    extract_between, extract_record, extract_records, find_between, ResponseRecord, APPLICATION_DATE_MARKER,
    DECISION_DATE_MARKER, STATUS_MARKER,
};
pub use crate::clean::{clean_decision_date, clean_status, scrub_decision_date, CleanedDate, DATE_OVERRIDES, UNKNOWN_STATUS};
pub use crate::date::{iter_days, parse_decision_date, weekday_from_name, weekday_name, weekday_number};
pub use crate::table::{ResponseRow, ResponseTable};
pub use crate::aggregate::{
    count_by_date, daily_counts, release_day_frequency, status_counts, weekday_summary, DailyCount,
    ReleaseDayFrequency, StatusCount, WeekdaySummary,
};
pub use crate::report::{save_chart_png, write_daily_chart, write_release_day_table, write_status_table, write_weekday_table};
pub use crate::util::init_tracing_once;
