//! Monitor loop - feeds new submissions to the classifier and dispatcher
//!
//! The loop has two states. It stays `Running` across transient service
//! failures (resubscribing to the stream each time) and moves to `Stopped`
//! only when the operator interrupts it. Any other failure is returned.

use std::time::Duration;

use log::{debug, info, warn};

use super::{Classifier, Dispatcher};
use crate::core::ServiceError;
use crate::core::ports::{SubmissionSource, SubmissionView};
use crate::shutdown::Shutdown;

/// State of the monitor loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Watching the stream
    Running,
    /// Interrupted by the operator
    Stopped,
}

/// Watches one subreddit's submission stream
pub struct Monitor<'a> {
    source: &'a dyn SubmissionSource,
    classifier: &'a Classifier,
    dispatcher: &'a Dispatcher<'a>,
    shutdown: Shutdown,
    retry_delay: Duration,
}

impl std::fmt::Debug for Monitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("dispatcher", self.dispatcher)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}

impl<'a> Monitor<'a> {
    /// Create a monitor for the dispatcher's subreddit
    #[must_use]
    pub const fn new(
        source: &'a dyn SubmissionSource,
        classifier: &'a Classifier,
        dispatcher: &'a Dispatcher<'a>,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            source,
            classifier,
            dispatcher,
            shutdown,
            retry_delay: Duration::from_secs(5),
        }
    }

    /// Pause before resubscribing after a transient failure
    #[must_use]
    pub const fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Run until interrupted
    ///
    /// Returns an error only for failures that are not transient.
    pub fn run(&self) -> Result<(), ServiceError> {
        info!("Monitoring /r/{}", self.dispatcher.subreddit());
        let mut state = MonitorState::Running;
        while state == MonitorState::Running {
            state = self.watch()?;
        }
        info!("Termination received. Goodbye!");
        Ok(())
    }

    /// Consume one subscription of the stream
    fn watch(&self) -> Result<MonitorState, ServiceError> {
        let outcome = self.source.stream(self.dispatcher.subreddit()).and_then(|mut stream| {
            while let Some(submission) = stream.next_submission()? {
                self.process(&submission)?;
            }
            Ok(())
        });

        match outcome {
            Ok(()) => Ok(MonitorState::Stopped),
            Err(err) if err.is_transient() => {
                warn!("{err}; resubscribing to the submission stream");
                if self.shutdown.wait(self.retry_delay) {
                    Ok(MonitorState::Stopped)
                } else {
                    Ok(MonitorState::Running)
                }
            },
            Err(err) => Err(err),
        }
    }

    /// Classify and dispatch a single submission unless it is already labeled
    pub fn process(&self, submission: &dyn SubmissionView) -> Result<(), ServiceError> {
        if submission.is_labeled() {
            debug!("Skipping labeled submission {}", submission.fullname());
            return Ok(());
        }
        let title = submission.title();
        let classification = self.classifier.classify(title);
        info!("{title} ({})", classification.kind());
        self.dispatcher.handle(submission, &classification)
    }
}
