//! Ranking and Markdown rendering of a stats report

use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::core::models::{Submission, View};

/// Authors whose activity is not ranked
const IGNORED_AUTHORS: [&str; 2] = ["[deleted]", "AutoModerator"];

/// How many submissions the "top submissions" section lists
const TOP_SUBMISSIONS: usize = 10;

/// An author's position in a ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    /// Author name
    pub author: String,
    /// Number of submissions or comments
    pub count: u64,
    /// Sum of their scores
    pub score: i64,
}

/// Rank authors of `(author, score)` entries by count, then total score
#[must_use]
pub fn rank<'a, I>(entries: I, limit: usize) -> Vec<Ranked>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut totals: HashMap<&str, (u64, i64)> = HashMap::new();
    for (author, score) in entries {
        if IGNORED_AUTHORS.contains(&author) {
            continue;
        }
        let entry = totals.entry(author).or_default();
        entry.0 += 1;
        entry.1 += score;
    }

    let mut ranked: Vec<Ranked> = totals
        .into_iter()
        .map(|(author, (count, score))| Ranked {
            author: author.to_string(),
            count,
            score,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.score.cmp(&a.score))
            .then_with(|| a.author.cmp(&b.author))
    });
    ranked.truncate(limit);
    ranked
}

/// Everything needed to render one report
#[derive(Debug, Clone)]
pub struct Report {
    /// Subreddit reported on
    pub subreddit: String,
    /// Requested view
    pub view: View,
    /// Start of the covered window
    pub start: DateTime<Utc>,
    /// End of the covered window
    pub end: DateTime<Utc>,
    /// Submissions in the window
    pub submission_count: usize,
    /// Comments in the window
    pub comment_count: usize,
    /// Ranked submitters
    pub submitters: Vec<Ranked>,
    /// Ranked commenters
    pub commenters: Vec<Ranked>,
    /// Highest scoring submissions, as `(title, link, score)`
    pub top_submissions: Vec<(String, String, i64)>,
}

impl Report {
    /// Build a report from collected data
    #[must_use]
    pub fn build(
        subreddit: &str,
        view: View,
        window: (DateTime<Utc>, DateTime<Utc>),
        submissions: &[Submission],
        comments: &[super::Comment],
        limits: (u32, u32),
    ) -> Self {
        let (submitter_limit, commenter_limit) = limits;
        let mut by_score: Vec<&Submission> = submissions.iter().collect();
        by_score.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            subreddit: subreddit.to_string(),
            view,
            start: window.0,
            end: window.1,
            submission_count: submissions.len(),
            comment_count: comments.len(),
            submitters: rank(
                submissions.iter().map(|s| (s.author.as_str(), s.score)),
                submitter_limit as usize,
            ),
            commenters: rank(
                comments.iter().map(|c| (c.author.as_str(), c.score)),
                commenter_limit as usize,
            ),
            top_submissions: by_score
                .into_iter()
                .take(TOP_SUBMISSIONS)
                .map(|s| (s.title.clone(), s.link(), s.score))
                .collect(),
        }
    }

    /// Announcement title; always classified as a stats announcement
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Subreddit Stats: {} ({} to {})",
            self.subreddit,
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    /// Markdown body of the announcement
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "## Subreddit Stats: /r/{}\n", self.subreddit);
        let _ = writeln!(
            out,
            "Period: {} to {} (view: {})\n",
            self.start.format("%Y-%m-%d %H:%M UTC"),
            self.end.format("%Y-%m-%d %H:%M UTC"),
            self.view
        );
        let _ = writeln!(out, "* {} submissions", self.submission_count);
        let _ = writeln!(out, "* {} comments\n", self.comment_count);

        render_ranking(&mut out, "Top Submitters", "Submissions", &self.submitters);
        render_ranking(&mut out, "Top Commenters", "Comments", &self.commenters);

        if !self.top_submissions.is_empty() {
            let _ = writeln!(out, "### Top Submissions\n");
            for (i, (title, link, score)) in self.top_submissions.iter().enumerate() {
                let _ = writeln!(out, "{}. [{}]({link}) ({score} points)", i + 1, escape(title));
            }
            out.push('\n');
        }

        out.push_str("^(Generated by statsbot.)\n");
        out
    }
}

fn render_ranking(out: &mut String, heading: &str, unit: &str, ranked: &[Ranked]) {
    if ranked.is_empty() {
        return;
    }
    let _ = writeln!(out, "### {heading}\n");
    let _ = writeln!(out, "| # | Author | {unit} | Score |");
    let _ = writeln!(out, "|--:|:--|--:|--:|");
    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(out, "| {} | /u/{} | {} | {} |", i + 1, r.author, r.count, r.score);
    }
    out.push('\n');
}

/// Escape characters that would break a Markdown link label
fn escape(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
