//! Helpers over reddit's JSON "Listing" payloads.

use serde_json::Value;
use std::collections::VecDeque;

/// One entry of a flattened comment tree. `body` is `None` for "load more" stubs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawComment {
    pub id: Option<String>,
    pub body: Option<String>,
}

impl RawComment {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self { id: None, body: Some(body.into()) }
    }
    pub fn stub() -> Self {
        Self::default()
    }
}

/// `data.children` of a Listing, or an empty slice for anything else
/// (reddit encodes "no replies" as an empty string).
pub fn listing_children(v: &Value) -> &[Value] {
    v.get("data")
        .and_then(|d| d.get("children"))
        .and_then(|c| c.as_array())
        .map(|a| a.as_slice())
        .unwrap_or(&[])
}

/// Heuristic: a thing is a comment if its kind is `t1`.
pub fn is_comment_thing(v: &Value) -> bool {
    v.get("kind").and_then(|k| k.as_str()) == Some("t1")
}

fn thing_id(v: &Value) -> Option<String> {
    v.get("data")
        .and_then(|d| d.get("id"))
        .and_then(|x| x.as_str())
        .map(str::to_string)
}

/// Extract the text body of a `t1` thing.
pub fn comment_body(v: &Value) -> Option<String> {
    v.get("data")
        .and_then(|d| d.get("body"))
        .and_then(|x| x.as_str())
        .map(str::to_string)
}

/// Flatten a comments Listing breadth-first: every top-level comment first,
/// then their replies in queue order. "more" stubs are kept (without a body)
/// and contribute no replies.
pub fn flatten_comment_listing(listing: &Value) -> Vec<RawComment> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&Value> = listing_children(listing).iter().collect();
    while let Some(thing) = queue.pop_front() {
        if is_comment_thing(thing) {
            out.push(RawComment { id: thing_id(thing), body: comment_body(thing) });
            if let Some(replies) = thing.get("data").and_then(|d| d.get("replies")) {
                queue.extend(listing_children(replies).iter());
            }
        } else {
            out.push(RawComment { id: thing_id(thing), body: None });
        }
    }
    out
}

/// The `/comments/{id}` endpoint returns `[submission_listing, comments_listing]`.
pub fn comments_listing(payload: &Value) -> Option<&Value> {
    payload.as_array().and_then(|a| a.get(1))
}
