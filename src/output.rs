//! Output formatting for human and JSON modes
//!
//! Listings can be rendered either as human-readable text or as
//! machine-parseable JSON.

use chrono::{TimeZone, Utc};
use serde::Serialize;

use crate::core::models::Submission;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of the `unlabeled` command
#[derive(Debug, Serialize)]
pub struct UnlabeledListing {
    /// Subreddit that was listed
    pub subreddit: String,
    /// Unlabeled submissions, newest first
    pub submissions: Vec<SubmissionEntry>,
}

/// One listed submission
#[derive(Debug, Serialize)]
pub struct SubmissionEntry {
    /// Thing fullname
    pub fullname: String,
    /// Title
    pub title: String,
    /// Author name
    pub author: String,
    /// Absolute link to the comments page
    pub link: String,
    /// Creation time (RFC 3339)
    pub created: String,
}

impl From<&Submission> for SubmissionEntry {
    fn from(submission: &Submission) -> Self {
        let created = Utc
            .timestamp_opt(submission.created_utc as i64, 0)
            .single()
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        Self {
            fullname: submission.fullname.clone(),
            title: submission.title.clone(),
            author: submission.author.clone(),
            link: submission.link(),
            created,
        }
    }
}

impl UnlabeledListing {
    /// Build a listing from submissions already ordered newest first
    #[must_use]
    pub fn new(subreddit: &str, submissions: &[Submission]) -> Self {
        Self {
            subreddit: subreddit.to_string(),
            submissions: submissions.iter().map(SubmissionEntry::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.submissions.is_empty() {
            return format!("No unlabeled submissions in /r/{}.\n", self.subreddit);
        }
        let mut out = format!(
            "{} unlabeled submission(s) in /r/{}:\n\n",
            self.submissions.len(),
            self.subreddit
        );
        for entry in &self.submissions {
            out.push_str(&format!("  {}  {}\n", entry.created, entry.title));
            out.push_str(&format!("          by /u/{} - {}\n", entry.author, entry.link));
        }
        out
    }

    /// Pretty-printed JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
