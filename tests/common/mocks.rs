//! Mock implementations of port traits for testing
//!
//! These mocks record every call and provide configurable failures
//! without any network access.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use statsbot::core::ServiceError;
use statsbot::core::models::{Label, Submission};
use statsbot::core::ports::{
    Labeler, ReplyOutcome, Replier, StatsJob, StatsRunner, SubmissionSource, SubmissionStream,
    SubmissionView, SubredditDirectory,
};
use statsbot::shutdown::Shutdown;

type ErrorFactory = Box<dyn Fn() -> ServiceError>;

/// One scripted stream read
pub type StreamItem = Result<Submission, ServiceError>;

/// Mock reddit implementing every reddit-facing port
#[derive(Default)]
pub struct MockReddit {
    /// `(fullname, label)` for every successful or failed label call
    pub labels: RefCell<Vec<(String, Label)>>,
    /// `(fullname, body)` for every reply attempt
    pub replies: RefCell<Vec<(String, String)>>,
    /// Names passed to `resolve`
    pub resolved: RefCell<Vec<String>>,
    /// Number of `stream` calls
    pub subscriptions: Cell<usize>,
    /// Limits passed to `newest`
    pub newest_calls: RefCell<Vec<usize>>,
    label_error: RefCell<Option<ErrorFactory>>,
    reply_outcome: RefCell<Option<Box<dyn Fn() -> ReplyOutcome>>>,
    resolve_error: RefCell<Option<ErrorFactory>>,
    scripts: RefCell<VecDeque<Vec<StreamItem>>>,
    pages: RefCell<VecDeque<Result<Vec<Submission>, ServiceError>>>,
    stop_when_exhausted: Option<Shutdown>,
}

impl MockReddit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every label call fails with the given error
    pub fn failing_labels(self, error: impl Fn() -> ServiceError + 'static) -> Self {
        *self.label_error.borrow_mut() = Some(Box::new(error));
        self
    }

    /// Every reply call returns the given outcome
    pub fn replying(self, outcome: impl Fn() -> ReplyOutcome + 'static) -> Self {
        *self.reply_outcome.borrow_mut() = Some(Box::new(outcome));
        self
    }

    /// Every subreddit lookup fails with the given error
    pub fn failing_resolve(self, error: impl Fn() -> ServiceError + 'static) -> Self {
        *self.resolve_error.borrow_mut() = Some(Box::new(error));
        self
    }

    /// Add the reads of one stream subscription
    pub fn with_subscription(self, items: Vec<StreamItem>) -> Self {
        self.scripts.borrow_mut().push_back(items);
        self
    }

    /// Add one result of `newest`
    pub fn with_page(self, page: Result<Vec<Submission>, ServiceError>) -> Self {
        self.pages.borrow_mut().push_back(page);
        self
    }

    /// Request shutdown once all pages were served
    pub fn stopping(mut self, shutdown: &Shutdown) -> Self {
        self.stop_when_exhausted = Some(shutdown.clone());
        self
    }

    pub fn labels(&self) -> Vec<(String, Label)> {
        self.labels.borrow().clone()
    }

    pub fn replies(&self) -> Vec<(String, String)> {
        self.replies.borrow().clone()
    }
}

impl Labeler for MockReddit {
    fn set_label(&self, submission: &dyn SubmissionView, label: Label) -> Result<(), ServiceError> {
        self.labels.borrow_mut().push((submission.fullname().to_string(), label));
        match self.label_error.borrow().as_ref() {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }
}

impl Replier for MockReddit {
    fn reply(&self, submission: &dyn SubmissionView, body: &str) -> ReplyOutcome {
        self.replies
            .borrow_mut()
            .push((submission.fullname().to_string(), body.to_string()));
        self.reply_outcome
            .borrow()
            .as_ref()
            .map_or(ReplyOutcome::Posted, |outcome| outcome())
    }
}

impl SubredditDirectory for MockReddit {
    fn resolve(&self, name: &str) -> Result<String, ServiceError> {
        self.resolved.borrow_mut().push(name.to_string());
        match self.resolve_error.borrow().as_ref() {
            Some(error) => Err(error()),
            None => Ok(name.to_string()),
        }
    }
}

/// Replays one scripted subscription, then reports an interrupt
pub struct ScriptedStream {
    items: VecDeque<StreamItem>,
}

impl SubmissionStream for ScriptedStream {
    fn next_submission(&mut self) -> Result<Option<Submission>, ServiceError> {
        match self.items.pop_front() {
            Some(Ok(submission)) => Ok(Some(submission)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

impl SubmissionSource for MockReddit {
    fn stream(&self, _subreddit: &str) -> Result<Box<dyn SubmissionStream + '_>, ServiceError> {
        self.subscriptions.set(self.subscriptions.get() + 1);
        let items = self.scripts.borrow_mut().pop_front().unwrap_or_default();
        Ok(Box::new(ScriptedStream { items: items.into() }))
    }

    fn newest(&self, _subreddit: &str, limit: usize) -> Result<Vec<Submission>, ServiceError> {
        self.newest_calls.borrow_mut().push(limit);
        match self.pages.borrow_mut().pop_front() {
            Some(page) => page,
            None => {
                if let Some(shutdown) = &self.stop_when_exhausted {
                    shutdown.request();
                }
                Ok(Vec::new())
            },
        }
    }
}

/// Mock stats runner returning a fixed result
#[derive(Default)]
pub struct MockStats {
    /// Jobs it was asked to run
    pub jobs: RefCell<Vec<StatsJob>>,
    announcement: Option<Submission>,
}

impl MockStats {
    /// A runner that always fails
    pub fn failing() -> Self {
        Self::default()
    }

    /// A runner that always posts `announcement`
    pub fn posting(announcement: Submission) -> Self {
        Self {
            jobs: RefCell::default(),
            announcement: Some(announcement),
        }
    }
}

impl StatsRunner for MockStats {
    fn run(&self, job: &StatsJob) -> Option<Submission> {
        self.jobs.borrow_mut().push(job.clone());
        self.announcement.clone()
    }
}

/// Submission view that counts how often its title is read
pub struct SpySubmission {
    pub inner: Submission,
    pub title_reads: Cell<usize>,
}

impl SpySubmission {
    pub fn new(inner: Submission) -> Self {
        Self {
            inner,
            title_reads: Cell::new(0),
        }
    }
}

impl SubmissionView for SpySubmission {
    fn fullname(&self) -> &str {
        &self.inner.fullname
    }

    fn subreddit(&self) -> &str {
        &self.inner.subreddit
    }

    fn title(&self) -> &str {
        self.title_reads.set(self.title_reads.get() + 1);
        &self.inner.title
    }

    fn permalink(&self) -> &str {
        &self.inner.permalink
    }

    fn url(&self) -> &str {
        &self.inner.url
    }

    fn link_flair_text(&self) -> Option<&str> {
        self.inner.link_flair_text.as_deref()
    }
}
