use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use time::Weekday;

pub const DEFAULT_SUBREDDIT: &str = "omscs";
pub const DEFAULT_THREAD_ID: &str = "spbavt";
pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";

/// Reddit "script" app credentials. Loaded once at startup, never mutated.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl Credentials {
    /// Read `CLIENT_ID`, `CLIENT_SECRET` and `USER_AGENT`, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            client_id: std::env::var("CLIENT_ID").context("CLIENT_ID not set")?,
            client_secret: std::env::var("CLIENT_SECRET").context("CLIENT_SECRET not set")?,
            user_agent: std::env::var("USER_AGENT").context("USER_AGENT not set")?,
        })
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    pub subreddit: String,              // normalized lowercase, no "r/"
    pub thread_id: String,
    pub excluded_weekdays: Vec<Weekday>, // dropped from release-day frequency only
    pub chart_title: String,
    pub chart_path: Option<PathBuf>,    // None = terminal chart only
    pub auth_url: String,
    pub api_base: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            subreddit: DEFAULT_SUBREDDIT.to_string(),
            thread_id: DEFAULT_THREAD_ID.to_string(),
            // A single Tuesday report in the source thread is not trusted.
            excluded_weekdays: vec![Weekday::Tuesday],
            chart_title: "Number of OMSCS Responses by Day in 2022".to_string(),
            chart_path: None,
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AnalysisOptions {
    pub fn with_subreddit(mut self, sub: impl AsRef<str>) -> Self {
        let mut s = sub.as_ref().trim().to_lowercase();
        if let Some(rest) = s.strip_prefix("r/") {
            s = rest.to_string();
        }
        self.subreddit = s;
        self
    }
    pub fn with_thread_id(mut self, id: impl AsRef<str>) -> Self {
        let id = id.as_ref().trim();
        self.thread_id = id.strip_prefix("t3_").unwrap_or(id).to_string();
        self
    }
    pub fn with_excluded_weekdays<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut v: Vec<Weekday> = days.into_iter().collect();
        v.sort_by_key(|d| d.number_days_from_monday());
        v.dedup();
        self.excluded_weekdays = v;
        self
    }
    pub fn with_chart_title(mut self, title: impl Into<String>) -> Self {
        self.chart_title = title.into();
        self
    }
    pub fn with_chart_path(mut self, path: impl AsRef<Path>) -> Self {
        self.chart_path = Some(path.as_ref().to_path_buf());
        self
    }
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into().trim_end_matches('/').to_string();
        self
    }
}
