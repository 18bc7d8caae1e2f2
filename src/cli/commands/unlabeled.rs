//! Unlabeled command - list submissions the bot has not handled yet

use super::super::app::Settings;
use statsbot::adapters::reddit::RedditClient;
use statsbot::config;
use statsbot::core::ports::{SubmissionSource, SubmissionView};
use statsbot::output::UnlabeledListing;

/// List the newest unlabeled submissions, newest first, without side effects
pub fn unlabeled(settings: &Settings, limit: usize) -> anyhow::Result<()> {
    let site = config::load_site(&settings.config, &settings.site)?;
    let client = RedditClient::new(site.credentials())?;

    let mut submissions = client.newest(&settings.subreddit, limit)?;
    submissions.retain(|submission| !submission.is_labeled());

    UnlabeledListing::new(&settings.subreddit, &submissions).render(settings.output);
    Ok(())
}
