//! Read capability over a submission

/// Read-only access to the fields the bot looks at
pub trait SubmissionView {
    /// Thing fullname, e.g. `t3_abc123`
    fn fullname(&self) -> &str;

    /// Subreddit the submission was posted to
    fn subreddit(&self) -> &str;

    /// Submission title
    fn title(&self) -> &str;

    /// Comments page path
    fn permalink(&self) -> &str;

    /// Link target
    fn url(&self) -> &str;

    /// Current flair text, if any
    fn link_flair_text(&self) -> Option<&str>;

    /// Whether the submission carries a non-empty flair
    fn is_labeled(&self) -> bool {
        self.link_flair_text().is_some_and(|flair| !flair.is_empty())
    }
}
