//! Property-based tests for the classifier
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use statsbot::core::models::{Classification, View};
use statsbot::core::services::classify;

fn random_case(text: &str, flips: &[bool]) -> String {
    text.chars()
        .zip(flips.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    /// Classification is total: any string yields a result
    #[test]
    fn classify_never_panics(title in any::<String>()) {
        let _ = classify(&title);
    }

    /// Titles without either prefix are unknown
    #[test]
    fn unprefixed_titles_are_unknown(title in "[a-zA-Z0-9 ]{0,40}") {
        let lower = title.to_lowercase();
        prop_assume!(!lower.starts_with("[request]") && !lower.starts_with("subreddit stats:"));
        prop_assert_eq!(classify(&title), Classification::Unknown);
    }

    /// Anything after the request prefix is either a request or invalid
    #[test]
    fn request_prefix_never_unknown(rest in ".{0,40}") {
        let result = classify(&format!("[request]{rest}"));
        prop_assert!(matches!(result, Classification::Request(_) | Classification::InvalidRequest));
    }

    /// Well-formed requests round-trip their fields
    #[test]
    fn well_formed_requests_parse(
        name in "[a-zA-Z0-9_]{1,21}",
        days in 0u32..100_000,
        commenters in proptest::option::of(1u32..1000),
        submitters in proptest::option::of(1u32..1000),
    ) {
        let mut title = format!("[request] {name} {days}");
        if let Some(c) = commenters {
            title.push_str(&format!(" -c{c}"));
        }
        if let Some(s) = submitters {
            title.push_str(&format!(" -s{s}"));
        }
        match classify(&title) {
            Classification::Request(params) => {
                prop_assert_eq!(params.subreddit_name, name);
                prop_assert_eq!(params.view, View::Days(days));
                prop_assert_eq!(params.commenter_limit, commenters);
                prop_assert_eq!(params.submitter_limit, submitters);
            },
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    /// Prefixes and symbolic views are case-insensitive
    #[test]
    fn prefixes_are_case_insensitive(flips in proptest::collection::vec(any::<bool>(), 1..16)) {
        let request = random_case("[request] rust week", &flips);
        prop_assert!(matches!(classify(&request), Classification::Request(_)));
        let stats = random_case("subreddit stats: rust", &flips);
        prop_assert_eq!(classify(&stats), Classification::StatsAnnouncement);
    }
}
