//! Marker-delimited field scraping from comment bodies.

use crate::json_utils::RawComment;
use serde::Serialize;

pub const APPLICATION_DATE_MARKER: &str = "Application Date:** ";
pub const DECISION_DATE_MARKER: &str = "Decision Date:** ";
pub const STATUS_MARKER: &str = "Status:** ";
pub const FIELD_END_MARKER: &str = "\n";

/// Text between the first `start` and the first `end` after it.
/// `None` if either marker is missing.
pub fn extract_between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let len = text[from..].find(end)?;
    Some(&text[from..from + len])
}

/// Like `extract_between`, but "not found" is the empty string.
pub fn find_between(text: &str, start: &str, end: &str) -> String {
    extract_between(text, start, end).unwrap_or_default().to_string()
}

/// Raw fields scraped from one comment. `decision_date` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    pub application_date: String,
    pub decision_date: String,
    pub status: String,
}

pub fn extract_record(comment: &RawComment) -> Option<ResponseRecord> {
    let body = comment.body.as_deref()?;
    let decision_date = find_between(body, DECISION_DATE_MARKER, FIELD_END_MARKER);
    if decision_date.is_empty() {
        return None;
    }
    Some(ResponseRecord {
        application_date: find_between(body, APPLICATION_DATE_MARKER, FIELD_END_MARKER),
        decision_date,
        status: find_between(body, STATUS_MARKER, FIELD_END_MARKER),
    })
}

/// Records in traversal order; comments without a body or decision date are skipped.
pub fn extract_records(comments: &[RawComment]) -> Vec<ResponseRecord> {
    let mut no_body = 0usize;
    let mut no_decision = 0usize;
    let mut out = Vec::new();
    for c in comments {
        if c.body.is_none() {
            no_body += 1;
            continue;
        }
        match extract_record(c) {
            Some(r) => out.push(r),
            None => no_decision += 1,
        }
    }
    tracing::debug!(
        "Extracted {} records ({} without body, {} without decision date)",
        out.len(),
        no_body,
        no_decision
    );
    out
}
