//! Read-mostly view of a reddit submission

use crate::core::ports::SubmissionView;

/// A submission as returned by the reddit API
///
/// The bot never creates submissions directly (announcements are created by
/// the stats runner); it only reads them and asks collaborators to label or
/// reply to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Thing fullname, e.g. `t3_abc123`
    pub fullname: String,
    /// Base36 id without the kind prefix
    pub id: String,
    /// Subreddit the submission lives in
    pub subreddit: String,
    /// Submission title
    pub title: String,
    /// Path of the comments page, e.g. `/r/subreddit_stats/comments/...`
    pub permalink: String,
    /// Link target (equal to the comments page for self posts)
    pub url: String,
    /// Author name, `[deleted]` when unknown
    pub author: String,
    /// Current flair text, if any
    pub link_flair_text: Option<String>,
    /// Creation time as a unix timestamp
    pub created_utc: f64,
    /// Net score
    pub score: i64,
    /// Number of comments
    pub num_comments: u64,
}

impl Submission {
    /// Minimal submission carrying only identity and title
    #[must_use]
    pub fn new(fullname: impl Into<String>, subreddit: impl Into<String>, title: impl Into<String>) -> Self {
        let fullname = fullname.into();
        let id = fullname.strip_prefix("t3_").unwrap_or(&fullname).to_string();
        let subreddit = subreddit.into();
        let permalink = format!("/r/{subreddit}/comments/{id}/");
        Self {
            url: format!("https://www.reddit.com{permalink}"),
            fullname,
            id,
            subreddit,
            title: title.into(),
            permalink,
            author: "[deleted]".to_string(),
            link_flair_text: None,
            created_utc: 0.0,
            score: 0,
            num_comments: 0,
        }
    }

    /// Set the flair text
    #[must_use]
    pub fn with_flair(mut self, flair: impl Into<String>) -> Self {
        self.link_flair_text = Some(flair.into());
        self
    }

    /// Absolute link to the comments page
    #[must_use]
    pub fn link(&self) -> String {
        if self.permalink.starts_with("http") {
            self.permalink.clone()
        } else {
            format!("https://www.reddit.com{}", self.permalink)
        }
    }
}

impl SubmissionView for Submission {
    fn fullname(&self) -> &str {
        &self.fullname
    }

    fn subreddit(&self) -> &str {
        &self.subreddit
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn permalink(&self) -> &str {
        &self.permalink
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn link_flair_text(&self) -> Option<&str> {
        self.link_flair_text.as_deref()
    }
}
