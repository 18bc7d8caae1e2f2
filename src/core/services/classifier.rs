//! Title classifier - decides what a submission is from its title
//!
//! Classification is a pure function of the title text. Flair and other
//! metadata are checked by the caller.
//!
//! # Request grammar
//!
//! ```text
//! [request] [/r/ or r/]<subreddit> <view>[ -c<commenters>][ -s<submitters>]
//!
//! view: a day count, or one of all, day, hour, month, week, year
//! ```
//!
//! The grammar changed several times over the bot's life, so it is a value
//! ([`RequestGrammar`]) rather than a hard-coded check. Sites may configure
//! their own pattern.
//!
//! # Examples
//!
//! ```
//! use statsbot::core::models::{Classification, TopPeriod, View};
//! use statsbot::core::services::classify;
//!
//! match classify("[request] /r/python week -c5 -s3") {
//!     Classification::Request(params) => {
//!         assert_eq!(params.subreddit_name, "python");
//!         assert_eq!(params.view, View::Period(TopPeriod::Week));
//!         assert_eq!(params.commenter_limit, Some(5));
//!     },
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(classify("Check out my new project"), Classification::Unknown);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::{Classification, RequestParameters, View};

/// Lowercase prefix marking a request
pub const REQUEST_PREFIX: &str = "[request]";

/// Lowercase prefix marking a stats announcement
pub const STATS_PREFIX: &str = "subreddit stats:";

/// The current request grammar
pub const DEFAULT_REQUEST_PATTERN: &str = r"(?i)^\[request\]\s+(?:/?r/)?(?P<subreddit>\w+)\s+(?P<view>[0-9]+|all|day|hour|month|week|year)(?:\s+-c(?P<commenters>[0-9]+))?(?:\s+-s(?P<submitters>[0-9]+))?$";

static DEFAULT_GRAMMAR: LazyLock<RequestGrammar> = LazyLock::new(|| RequestGrammar {
    regex: Regex::new(DEFAULT_REQUEST_PATTERN).expect("default request pattern compiles"),
});

/// Errors that can occur when compiling a request grammar
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The pattern is not a valid regular expression
    #[error("invalid request pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A required named group is absent
    #[error("request pattern lacks the named group `{0}`")]
    MissingGroup(&'static str),
}

/// A compiled request title grammar
///
/// The pattern must define the named groups `subreddit` and `view`; the
/// groups `commenters` and `submitters` are optional.
///
/// A [`Classifier`] only consults the grammar for titles that start with
/// `[request]`, so a custom pattern has to accept that prefix as well. Other
/// titles never reach it.
#[derive(Debug, Clone)]
pub struct RequestGrammar {
    regex: Regex,
}

impl RequestGrammar {
    /// Compile a custom grammar
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(pattern)?;
        for group in ["subreddit", "view"] {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(GrammarError::MissingGroup(group));
            }
        }
        Ok(Self { regex })
    }

    /// Parse a full request title, `None` if it does not follow the grammar
    #[must_use]
    pub fn parse(&self, title: &str) -> Option<RequestParameters> {
        let caps = self.regex.captures(title)?;
        let subreddit_name = caps.name("subreddit")?.as_str().to_string();
        let view = caps.name("view")?.as_str().parse::<View>().ok()?;
        let commenter_limit = parse_limit(caps.name("commenters"))?;
        let submitter_limit = parse_limit(caps.name("submitters"))?;

        Some(RequestParameters {
            subreddit_name,
            view,
            commenter_limit,
            submitter_limit,
        })
    }
}

impl Default for RequestGrammar {
    fn default() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}

/// `Some(None)` when absent, `None` when present but not a positive `u32`
fn parse_limit(capture: Option<regex::Match<'_>>) -> Option<Option<u32>> {
    match capture {
        None => Some(None),
        Some(m) => m.as_str().parse::<u32>().ok().filter(|n| *n > 0).map(Some),
    }
}

/// Classifies titles with a given grammar
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    grammar: RequestGrammar,
}

impl Classifier {
    /// Create a classifier using `grammar` for requests
    #[must_use]
    pub const fn new(grammar: RequestGrammar) -> Self {
        Self { grammar }
    }

    /// Classify a submission title
    #[must_use]
    pub fn classify(&self, title: &str) -> Classification {
        let lower = title.to_lowercase();
        if lower.starts_with(REQUEST_PREFIX) {
            self.grammar
                .parse(title)
                .map_or(Classification::InvalidRequest, Classification::Request)
        } else if lower.starts_with(STATS_PREFIX) {
            Classification::StatsAnnouncement
        } else {
            Classification::Unknown
        }
    }
}

/// Classify a title with the default grammar
#[must_use]
pub fn classify(title: &str) -> Classification {
    Classifier::default().classify(title)
}
