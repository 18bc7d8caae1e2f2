//! Collection of the submissions and comments inside a report window

use log::debug;

use super::{Comment, StatsData};
use crate::core::ServiceError;
use crate::core::models::{Submission, View};

/// Listings stop being paginated after this many items
pub const MAX_ITEMS: usize = 1000;

const SECONDS_PER_DAY: i64 = 86_400;

/// Unix timestamp where the window of `view` starts, `None` if unbounded
#[must_use]
pub fn window_start(view: View, now: i64) -> Option<i64> {
    match view {
        View::Days(days) => Some(now - i64::from(days) * SECONDS_PER_DAY),
        View::Period(period) => period.seconds().map(|length| now - length),
    }
}

/// Fetch the submissions of `view`, newest listings first
///
/// Day-count views walk the `new` listing and stop at the first submission
/// older than the window; period views take the whole top listing.
pub fn submissions(
    data: &dyn StatsData,
    subreddit: &str,
    view: View,
    start: Option<i64>,
) -> Result<Vec<Submission>, ServiceError> {
    let mut collected = Vec::new();
    let mut after: Option<String> = None;
    loop {
        let page = data.submissions(subreddit, view, after.as_deref())?;
        let fetched = page.items.len();
        let mut reached_start = false;
        for submission in page.items {
            if matches!(view, View::Days(_)) && start.is_some_and(|s| (submission.created_utc as i64) < s) {
                reached_start = true;
                break;
            }
            collected.push(submission);
        }
        debug!("Collected {} submission(s) from /r/{subreddit}", collected.len());
        after = page.after;
        if reached_start || fetched == 0 || after.is_none() || collected.len() >= MAX_ITEMS {
            break;
        }
    }
    collected.truncate(MAX_ITEMS);
    Ok(collected)
}

/// Fetch comments newer than `start` from the subreddit's comment listing
pub fn comments(
    data: &dyn StatsData,
    subreddit: &str,
    start: i64,
) -> Result<Vec<Comment>, ServiceError> {
    let mut collected = Vec::new();
    let mut after: Option<String> = None;
    loop {
        let page = data.comments(subreddit, after.as_deref())?;
        let fetched = page.items.len();
        let mut reached_start = false;
        for comment in page.items {
            if (comment.created_utc as i64) < start {
                reached_start = true;
                break;
            }
            collected.push(comment);
        }
        after = page.after;
        if reached_start || fetched == 0 || after.is_none() || collected.len() >= MAX_ITEMS {
            break;
        }
    }
    collected.truncate(MAX_ITEMS);
    Ok(collected)
}
