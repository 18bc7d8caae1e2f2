//! Subreddit stats generation
//!
//! [`SubredditStats`] is the production [`StatsRunner`]: it collects the
//! submissions and comments of the requested window, ranks the most active
//! submitters and commenters, and posts the report as a new submission in
//! the monitored subreddit.

pub mod collect;
pub mod report;

use chrono::{DateTime, TimeZone, Utc};
use log::{error, info, warn};

use crate::core::ServiceError;
use crate::core::models::{Submission, View};
use crate::core::ports::{StatsJob, StatsRunner};

pub use report::{Ranked, Report};

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, newest (or highest ranked) first
    pub items: Vec<T>,
    /// Cursor of the next page, `None` at the end
    pub after: Option<String>,
}

/// A comment as far as the report is concerned
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Author name
    pub author: String,
    /// Net score
    pub score: i64,
    /// Creation time as a unix timestamp
    pub created_utc: f64,
}

/// Reddit calls the stats runner depends on
pub trait StatsData {
    /// A page of submissions for `view` (top listing or new listing)
    fn submissions(&self, subreddit: &str, view: View, after: Option<&str>)
    -> Result<Page<Submission>, ServiceError>;

    /// A page of the subreddit's newest comments
    fn comments(&self, subreddit: &str, after: Option<&str>) -> Result<Page<Comment>, ServiceError>;

    /// Post a self submission
    fn submit(&self, subreddit: &str, title: &str, body: &str) -> Result<Submission, ServiceError>;
}

/// Why a report could not be produced
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The window contains no submissions
    #[error("no submissions in /r/{0} for the requested view")]
    Empty(String),

    /// Reddit failed while collecting or posting
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Generates reports from reddit data
pub struct SubredditStats<'a> {
    data: &'a dyn StatsData,
}

impl std::fmt::Debug for SubredditStats<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubredditStats").finish_non_exhaustive()
    }
}

impl<'a> SubredditStats<'a> {
    /// Create a runner reading from and posting through `data`
    #[must_use]
    pub const fn new(data: &'a dyn StatsData) -> Self {
        Self { data }
    }

    /// Collect, render and post the report for `job` as of `now`
    pub fn generate(&self, job: &StatsJob, now: DateTime<Utc>) -> Result<Submission, StatsError> {
        let start = collect::window_start(job.view, now.timestamp());
        let submissions = collect::submissions(self.data, &job.subreddit, job.view, start)?;
        if submissions.is_empty() {
            return Err(StatsError::Empty(job.subreddit.clone()));
        }

        // Unbounded views start at the oldest collected submission
        let start = start.unwrap_or_else(|| {
            submissions
                .iter()
                .map(|s| s.created_utc as i64)
                .min()
                .unwrap_or_else(|| now.timestamp())
        });
        let comments = collect::comments(self.data, &job.subreddit, start)?;

        let report = Report::build(
            &job.subreddit,
            job.view,
            (Utc.timestamp_opt(start, 0).single().unwrap_or(now), now),
            &submissions,
            &comments,
            (job.submitter_limit, job.commenter_limit),
        );
        info!(
            "Report for /r/{}: {} submissions, {} comments",
            job.subreddit, report.submission_count, report.comment_count
        );
        Ok(self.data.submit(&job.post_to, &report.title(), &report.render())?)
    }
}

impl StatsRunner for SubredditStats<'_> {
    fn run(&self, job: &StatsJob) -> Option<Submission> {
        match self.generate(job, Utc::now()) {
            Ok(announcement) => Some(announcement),
            Err(StatsError::Empty(subreddit)) => {
                warn!("Nothing to report for /r/{subreddit} ({})", job.view);
                None
            },
            Err(err) => {
                error!("Stats generation for /r/{} failed: {err}", job.subreddit);
                None
            },
        }
    }
}
