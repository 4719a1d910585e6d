#[path = "common/mod.rs"]
mod common;

use common::*;
use decision_days::{comments_listing, flatten_comment_listing};
use serde_json::json;

/// Tree:
///   a -> b -> d
///   c (no replies)
///   more stub
/// Breadth-first order: a, c, more, b, d.
#[test]
fn flatten_is_breadth_first_and_keeps_stubs() {
    let tree = listing(vec![
        t1("a", "top a", vec![t1("b", "reply b", vec![t1("d", "reply d", vec![])])]),
        t1("c", "top c", vec![]),
        more("m"),
    ]);
    let flat = flatten_comment_listing(&tree);
    let ids: Vec<&str> = flat.iter().map(|c| c.id.as_deref().unwrap_or("")).collect();
    assert_eq!(ids, vec!["a", "c", "m", "b", "d"]);

    assert_eq!(flat[0].body.as_deref(), Some("top a"));
    assert!(flat[2].body.is_none(), "'more' stubs have no body");
}

#[test]
fn comments_listing_is_second_element() {
    let payload = json!([
        listing(vec![json!({ "kind": "t3", "data": { "id": "spbavt" } })]),
        listing(vec![t1("a", "hello", vec![])]),
    ]);
    let flat = flatten_comment_listing(comments_listing(&payload).unwrap());
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].body.as_deref(), Some("hello"));

    assert!(comments_listing(&json!({ "error": 404 })).is_none());
}

#[test]
fn malformed_listing_flattens_to_nothing() {
    assert!(flatten_comment_listing(&json!("")).is_empty());
    assert!(flatten_comment_listing(&json!({ "data": {} })).is_empty());
}
