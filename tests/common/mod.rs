#![allow(dead_code)]

use decision_days::RawComment;
use serde_json::{json, Value};

/// A comment body in the thread's report template.
pub fn report_body(decision_date: &str, status: &str) -> String {
    format!(
        "**Application Date:** 1/15/2022\n**Decision Date:** {}\n**Status:** {}\n**Comments:** good luck all\n",
        decision_date, status
    )
}

/// A `t1` thing; an empty `replies` is encoded the way reddit does it (empty string).
pub fn t1(id: &str, body: &str, replies: Vec<Value>) -> Value {
    let replies = if replies.is_empty() { json!("") } else { listing(replies) };
    json!({
        "kind": "t1",
        "data": { "id": id, "body": body, "replies": replies }
    })
}

pub fn more(id: &str) -> Value {
    json!({
        "kind": "more",
        "data": { "id": id, "count": 12, "children": ["x1", "x2"] }
    })
}

pub fn listing(children: Vec<Value>) -> Value {
    json!({ "kind": "Listing", "data": { "children": children } })
}

/// Six reports plus noise:
///   2022-04-05 (Tue) accepted, 2022-04-06 (Wed) accepted x2,
///   2022-04-08 (Fri) rejected, 2022-04-27 (Wed) unknown status,
///   one unparsable date ("soon") that is waitlisted.
/// Noise: a chatty comment without markers and a "more" stub.
pub fn sample_comments() -> Vec<RawComment> {
    vec![
        RawComment::with_body(report_body("<br>04/05/2022\r", "Accepted\r")),
        RawComment::with_body("congrats everyone!"),
        RawComment::with_body(report_body("04/06/2022", "Accepted!!")),
        RawComment::with_body(report_body("4/6/2022 at 3pm", "[<Accepted>]")),
        RawComment::stub(),
        RawComment::with_body(report_body("04/08/2022", "Rejected :(")),
        RawComment::with_body(report_body("4/27", "")),
        RawComment::with_body(report_body("soon", "Waitlisted")),
    ]
}
