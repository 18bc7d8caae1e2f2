//! Polling stream of new submissions
//!
//! Reddit has no push API for submissions, so a stream repeatedly fetches
//! the newest page and yields the items it has not seen yet, oldest first.
//! The first poll replays whatever is currently on the page. While nothing
//! new arrives the delay between polls doubles up to a maximum, and resets
//! as soon as something shows up.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use log::debug;

use super::client::PAGE_SIZE;
use crate::core::ServiceError;
use crate::core::models::Submission;
use crate::core::ports::{SubmissionSource, SubmissionStream};
use crate::shutdown::Shutdown;

/// How many fullnames a stream remembers
const SEEN_CAPACITY: usize = 301;

/// Poll timing of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    /// Delay after a poll that returned new items
    pub poll_interval: Duration,
    /// Upper bound of the backoff while idle
    pub max_poll_interval: Duration,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_poll_interval: Duration::from_secs(16),
        }
    }
}

/// Insertion-ordered set that forgets its oldest entries
#[derive(Debug, Default)]
struct SeenSet {
    order: VecDeque<String>,
    members: HashSet<String>,
}

impl SeenSet {
    /// Returns `true` if `fullname` was not seen before
    fn insert(&mut self, fullname: &str) -> bool {
        if self.members.contains(fullname) {
            return false;
        }
        if self.order.len() == SEEN_CAPACITY {
            if let Some(oldest) = self.order.pop_front() {
                self.members.remove(&oldest);
            }
        }
        self.order.push_back(fullname.to_string());
        self.members.insert(fullname.to_string());
        true
    }
}

/// Stream over a [`SubmissionSource`]'s newest listing
pub struct PollingStream<'a> {
    source: &'a dyn SubmissionSource,
    subreddit: String,
    shutdown: Shutdown,
    settings: StreamSettings,
    seen: SeenSet,
    pending: VecDeque<Submission>,
    delay: Duration,
    polled: bool,
}

impl std::fmt::Debug for PollingStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollingStream")
            .field("subreddit", &self.subreddit)
            .field("pending", &self.pending.len())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl<'a> PollingStream<'a> {
    /// Start a stream; nothing is fetched until the first read
    #[must_use]
    pub fn new(
        source: &'a dyn SubmissionSource,
        subreddit: &str,
        shutdown: Shutdown,
        settings: StreamSettings,
    ) -> Self {
        Self {
            source,
            subreddit: subreddit.to_string(),
            shutdown,
            settings,
            seen: SeenSet::default(),
            pending: VecDeque::new(),
            delay: settings.poll_interval,
            polled: false,
        }
    }

    fn poll(&mut self) -> Result<(), ServiceError> {
        let newest = self.source.newest(&self.subreddit, PAGE_SIZE)?;
        let before = self.pending.len();
        for submission in newest.into_iter().rev() {
            if self.seen.insert(&submission.fullname) {
                self.pending.push_back(submission);
            }
        }
        let fresh = self.pending.len() - before;
        debug!("Polled /r/{}: {fresh} new submission(s)", self.subreddit);

        self.delay = if fresh == 0 {
            (self.delay * 2).min(self.settings.max_poll_interval)
        } else {
            self.settings.poll_interval
        };
        self.polled = true;
        Ok(())
    }
}

impl SubmissionStream for PollingStream<'_> {
    fn next_submission(&mut self) -> Result<Option<Submission>, ServiceError> {
        loop {
            if self.shutdown.is_requested() {
                return Ok(None);
            }
            if let Some(submission) = self.pending.pop_front() {
                return Ok(Some(submission));
            }
            if self.polled && self.shutdown.wait(self.delay) {
                return Ok(None);
            }
            self.poll()?;
        }
    }
}
