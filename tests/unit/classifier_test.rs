//! Tests for title classification

use statsbot::core::models::{Classification, RequestParameters, TopPeriod, View};
use statsbot::core::services::{Classifier, RequestGrammar, classify};

fn request(title: &str) -> RequestParameters {
    match classify(title) {
        Classification::Request(params) => params,
        other => panic!("expected a request for {title:?}, got {other:?}"),
    }
}

#[test]
fn test_request_with_symbolic_view() {
    let params = request("[request] redditdev all");
    assert_eq!(params.subreddit_name, "redditdev");
    assert_eq!(params.view, View::Period(TopPeriod::All));
    assert_eq!(params.commenter_limit, None);
    assert_eq!(params.submitter_limit, None);
    assert_eq!(params.commenters(), 10);
    assert_eq!(params.submitters(), 10);
}

#[test]
fn test_request_with_day_count() {
    let params = request("[request] subreddit_stats 730");
    assert_eq!(params.subreddit_name, "subreddit_stats");
    assert_eq!(params.view, View::Days(730));
    assert_eq!(params.view.to_string(), "730");
}

#[test]
fn test_request_with_prefix_and_limits() {
    let params = request("[REQUEST] /r/python week -c5 -s3");
    assert_eq!(params.subreddit_name, "python");
    assert_eq!(params.view, View::Period(TopPeriod::Week));
    assert_eq!(params.commenter_limit, Some(5));
    assert_eq!(params.submitter_limit, Some(3));
}

#[test]
fn test_request_with_bare_r_prefix() {
    assert_eq!(request("[request] r/rust month").subreddit_name, "rust");
}

#[test]
fn test_view_is_lowercased() {
    assert_eq!(request("[request] rust YeAr").view.to_string(), "year");
}

#[test]
fn test_only_one_limit() {
    let params = request("[request] rust day -s25");
    assert_eq!(params.commenter_limit, None);
    assert_eq!(params.submitter_limit, Some(25));
}

#[test]
fn test_invalid_request() {
    assert_eq!(classify("[request] not a valid request !!"), Classification::InvalidRequest);
}

#[test]
fn test_request_prefix_alone_is_invalid() {
    assert_eq!(classify("[request]"), Classification::InvalidRequest);
    assert_eq!(classify("[Request]   "), Classification::InvalidRequest);
}

#[test]
fn test_stats_announcement() {
    assert_eq!(
        classify("Subreddit Stats: MySubreddit (2020-01-01 to 2020-02-01)"),
        Classification::StatsAnnouncement
    );
}

#[test]
fn test_unknown() {
    assert_eq!(classify("Check out my new project"), Classification::Unknown);
}

#[test]
fn test_empty_and_whitespace_titles_are_unknown() {
    assert_eq!(classify(""), Classification::Unknown);
    assert_eq!(classify("   \t "), Classification::Unknown);
}

#[test]
fn test_prefix_must_start_the_title() {
    assert_eq!(classify("please [request] rust all"), Classification::Unknown);
    assert_eq!(classify("My Subreddit Stats: rust"), Classification::Unknown);
}

#[test]
fn test_classifier_with_default_grammar_matches_free_function() {
    let classifier = Classifier::new(RequestGrammar::default());
    for title in ["[request] rust all", "[request] ???", "subreddit stats: x", "hello"] {
        assert_eq!(classifier.classify(title), classify(title));
    }
}

#[test]
fn test_custom_grammar_changes_requests_only() {
    let grammar = RequestGrammar::new(r"(?i)^\[request\] /r/(?P<subreddit>\w+) (?P<view>[0-9]+)$").unwrap();
    let classifier = Classifier::new(grammar);

    assert!(matches!(classifier.classify("[request] /r/rust 30"), Classification::Request(_)));
    // The default grammar accepts this, the narrower one does not
    assert_eq!(classifier.classify("[request] rust all"), Classification::InvalidRequest);
    assert_eq!(classifier.classify("Subreddit Stats: rust"), Classification::StatsAnnouncement);
}
