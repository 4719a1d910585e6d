//! Blocking reddit API client (application-only OAuth) and the `CommentSource` seam.

use crate::config::{AnalysisOptions, Credentials};
use crate::json_utils::{comments_listing, flatten_comment_listing, RawComment};
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

/// Anything that can produce the flattened comment list of a thread.
pub trait CommentSource {
    fn fetch_comments(&self, thread_id: &str) -> Result<Vec<RawComment>>;
}

/// In-memory source; useful for replaying a saved snapshot.
impl CommentSource for Vec<RawComment> {
    fn fetch_comments(&self, _thread_id: &str) -> Result<Vec<RawComment>> {
        Ok(self.clone())
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

pub struct RedditClient {
    client: Client,
    token: String,
    api_base: String,
    subreddit: String,
}

impl RedditClient {
    /// Authenticate with the client-credentials grant. Fails on HTTP or auth errors.
    pub fn connect(creds: &Credentials, opts: &AnalysisOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(creds.user_agent.clone())
            .build()
            .context("building HTTP client")?;

        let resp = client
            .post(&opts.auth_url)
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .with_context(|| format!("requesting token from {}", opts.auth_url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("token request failed: HTTP {}", status));
        }
        let body: TokenResponse = resp.json().context("decoding token response")?;
        let token = match (body.access_token, body.error) {
            (Some(t), _) if !t.is_empty() => t,
            (_, Some(e)) => return Err(anyhow!("token request rejected: {}", e)),
            _ => return Err(anyhow!("token response has no access_token")),
        };
        tracing::info!("Authenticated against reddit API as {}", creds.user_agent);

        Ok(Self {
            client,
            token,
            api_base: opts.api_base.trim_end_matches('/').to_string(),
            subreddit: opts.subreddit.clone(),
        })
    }

    fn comments_url(&self, thread_id: &str) -> String {
        format!("{}/r/{}/comments/{}", self.api_base, self.subreddit, thread_id)
    }
}

impl CommentSource for RedditClient {
    fn fetch_comments(&self, thread_id: &str) -> Result<Vec<RawComment>> {
        let url = self.comments_url(thread_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("raw_json", "1"), ("limit", "500")])
            .send()
            .with_context(|| format!("GET {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} failed: HTTP {}", url, status));
        }
        let payload: Value = resp.json().with_context(|| format!("decoding {}", url))?;
        let listing = comments_listing(&payload)
            .ok_or_else(|| anyhow!("unexpected payload shape from {}", url))?;

        let comments = flatten_comment_listing(listing);
        tracing::info!("Fetched {} comments from thread {}", comments.len(), thread_id);
        Ok(comments)
    }
}
