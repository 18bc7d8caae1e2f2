//! Reply capability
//!
//! Replying is the one operation with an expected, benign failure: reddit
//! refuses comments on archived submissions. That case is part of the
//! outcome type instead of an error to inspect.

use super::SubmissionView;
use crate::core::ServiceError;

/// Outcome of posting a reply
#[derive(Debug)]
pub enum ReplyOutcome {
    /// The comment was posted
    Posted,
    /// The submission is archived; no comment was posted
    TooOldToReply,
    /// Any other failure
    Failed(ServiceError),
}

/// Posts comments on submissions
pub trait Replier {
    /// Post `body` as a top-level comment on `submission`
    fn reply(&self, submission: &dyn SubmissionView, body: &str) -> ReplyOutcome;
}
