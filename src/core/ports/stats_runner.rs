//! Stats generation capability

use crate::core::models::{Submission, View};

/// One stats generation job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsJob {
    /// Subreddit to report on
    pub subreddit: String,
    /// Reporting window
    pub view: View,
    /// Number of top submitters to list
    pub submitter_limit: u32,
    /// Number of top commenters to list
    pub commenter_limit: u32,
    /// Subreddit the announcement is posted to
    pub post_to: String,
}

/// Generates a stats report and posts it as an announcement
pub trait StatsRunner {
    /// Run the job; `None` means the report could not be produced
    ///
    /// Implementations log their own failures.
    fn run(&self, job: &StatsJob) -> Option<Submission>;
}
