use crate::aggregate::{
    daily_counts, release_day_frequency, status_counts, weekday_summary, DailyCount, ReleaseDayFrequency,
    StatusCount, WeekdaySummary,
};
use crate::config::{AnalysisOptions, Credentials};
use crate::extract::extract_records;
use crate::fetch::{CommentSource, RedditClient};
use crate::json_utils::RawComment;
use crate::report::{save_chart_png, write_daily_chart, write_release_day_table, write_status_table, write_weekday_table};
use crate::table::ResponseTable;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use time::Weekday;

#[derive(Clone, Debug, Default)]
pub struct DecisionAnalysis {
    pub(crate) opts: AnalysisOptions,
}

/// Everything one run produces.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    #[serde(skip)]
    pub chart_title: String,
    pub table: ResponseTable,
    pub daily: Vec<DailyCount>,
    pub weekdays: Vec<WeekdaySummary>,
    pub release_days: Vec<ReleaseDayFrequency>,
    pub statuses: Vec<StatusCount>,
}

impl DecisionAnalysis {
    pub fn new() -> Self {
        Self { opts: AnalysisOptions::default() }
    }

    pub fn with_options(opts: AnalysisOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn subreddit(mut self, sub: impl AsRef<str>) -> Self { self.opts = self.opts.with_subreddit(sub); self }
    pub fn thread_id(mut self, id: impl AsRef<str>) -> Self { self.opts = self.opts.with_thread_id(id); self }
    pub fn excluded_weekdays<I: IntoIterator<Item = Weekday>>(mut self, days: I) -> Self { self.opts = self.opts.with_excluded_weekdays(days); self }
    pub fn chart_title(mut self, title: impl Into<String>) -> Self { self.opts = self.opts.with_chart_title(title); self }
    pub fn save_chart_to(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_chart_path(path); self }
    pub fn auth_url(mut self, url: impl Into<String>) -> Self { self.opts = self.opts.with_auth_url(url); self }
    pub fn api_base(mut self, url: impl Into<String>) -> Self { self.opts = self.opts.with_api_base(url); self }

    pub fn options(&self) -> &AnalysisOptions {
        &self.opts
    }

    /// Extract and clean; comments without a body or decision date are dropped.
    pub fn build_table(&self, comments: &[RawComment]) -> ResponseTable {
        let records = extract_records(comments);
        tracing::info!("Built table with {} responses from {} comments", records.len(), comments.len());
        ResponseTable::from_records(records)
    }

    pub fn analyze_table(&self, table: ResponseTable) -> AnalysisReport {
        let daily = daily_counts(&table);
        let weekdays = weekday_summary(&table);
        let release_days = release_day_frequency(&table, &self.opts.excluded_weekdays);
        let statuses = status_counts(&table);
        if daily.is_empty() {
            tracing::warn!("No parsable decision dates; daily and weekday series are empty.");
        }
        AnalysisReport {
            chart_title: self.opts.chart_title.clone(),
            table,
            daily,
            weekdays,
            release_days,
            statuses,
        }
    }

    /// Fetch from `source` and aggregate.
    pub fn run_with(&self, source: &dyn CommentSource) -> Result<AnalysisReport> {
        init_tracing_once();
        let comments = source
            .fetch_comments(&self.opts.thread_id)
            .with_context(|| format!("fetching comments of thread {}", self.opts.thread_id))?;
        let report = self.analyze_table(self.build_table(&comments));
        if let Some(path) = &self.opts.chart_path {
            save_chart_png(path, &report.chart_title, &report.daily)?;
        }
        Ok(report)
    }

    /// Authenticate against reddit with `creds` and run.
    pub fn run(&self, creds: &Credentials) -> Result<AnalysisReport> {
        init_tracing_once();
        let client = RedditClient::connect(creds, &self.opts)?;
        self.run_with(&client)
    }
}

impl AnalysisReport {
    pub fn render<W: Write>(&self, w: &mut W) -> Result<()> {
        write_daily_chart(w, &self.chart_title, &self.daily)?;
        writeln!(w)?;
        write_weekday_table(w, &self.weekdays)?;
        writeln!(w)?;
        write_release_day_table(w, &self.release_days)?;
        writeln!(w)?;
        write_status_table(w, &self.statuses)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
