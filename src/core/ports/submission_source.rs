//! Submission listing and streaming capability

use crate::core::ServiceError;
use crate::core::models::Submission;

/// A live subscription to new submissions
pub trait SubmissionStream {
    /// Block until the next submission arrives
    ///
    /// Returns `Ok(None)` once the operator asked the bot to stop.
    fn next_submission(&mut self) -> Result<Option<Submission>, ServiceError>;
}

/// Source of submissions for one subreddit
pub trait SubmissionSource {
    /// Subscribe to new submissions, starting with a replay of recent ones
    fn stream(&self, subreddit: &str) -> Result<Box<dyn SubmissionStream + '_>, ServiceError>;

    /// Newest submissions, newest first
    fn newest(&self, subreddit: &str, limit: usize) -> Result<Vec<Submission>, ServiceError>;
}
