//! Tests for output rendering

use insta::assert_snapshot;

use super::*;
use crate::autocode::SegmentRequest;
use crate::matcher::{MatchScope, MatchType};

#[test]
fn test_render_matches_text() {
    let matcher = TextMatcher::new("The café serves café au lait");
    let matches = matcher.find_matches("café", MatchType::Exact, MatchScope::All, false);

    let out = render_matches(&matcher, &matches, OutputFormat::Text).unwrap();
    assert_snapshot!(out, @r"
    4..8  café
    16..20  café
    ");
}

#[test]
fn test_render_matches_text_escapes_line_breaks() {
    let matcher = TextMatcher::new("first line\nsecond line");
    let matches = matcher.find_matches(r"line\ns", MatchType::Regex, MatchScope::All, false);

    let out = render_matches(&matcher, &matches, OutputFormat::Text).unwrap();
    assert_eq!(out, "6..12  line\\ns\n");
}

#[test]
fn test_render_no_matches_text_is_empty() {
    let matcher = TextMatcher::new("nothing here");
    let out = render_matches(&matcher, &[], OutputFormat::Text).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_render_matches_json() {
    let matcher = TextMatcher::new("cat cat");
    let matches = matcher.find_matches("cat", MatchType::Exact, MatchScope::Last, false);

    let out = render_matches(&matcher, &matches, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "start": 4, "end": 7, "text": "cat" }])
    );
}

#[test]
fn test_render_many_matches_over_large_text() {
    let text = "é ".repeat(80_000);
    let matcher = TextMatcher::new(&text);
    let matches = matcher.find_matches("é", MatchType::Contains, MatchScope::All, false);

    let started = std::time::Instant::now();
    let out = render_matches(&matcher, &matches, OutputFormat::Text).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(out.lines().count(), 80_000);
    assert_eq!(out.lines().last(), Some("159998..159999  é"));
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "rendering took {:?}",
        elapsed
    );
}

#[test]
fn test_render_plan_text() {
    let plan = AutoCodePlan {
        requests: vec![SegmentRequest {
            code: "animals".to_string(),
            start: 4,
            end: 7,
            text: "cat".to_string(),
        }],
        skipped: 2,
    };

    let out = render_plan(&plan, OutputFormat::Text).unwrap();
    assert_snapshot!(out, @r"
    animals  4..7  cat
    1 segment(s) planned, 2 skipped
    ");
}

#[test]
fn test_render_plan_json() {
    let plan = AutoCodePlan::default();
    let out = render_plan(&plan, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, serde_json::json!({ "requests": [], "skipped": 0 }));
}

#[test]
fn test_output_format_parse() {
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
