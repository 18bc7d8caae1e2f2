//! Action dispatcher - applies the action for a classified submission
//!
//! | Classification      | Label                         | Reply             |
//! |---------------------|-------------------------------|-------------------|
//! | valid request       | IN PROGRESS, then SATISFIED   | announcement link |
//! | stats run failed    | BUG                           | bug notice        |
//! | invalid request     | UNSATISFIABLE                 | usage help        |
//! | stats announcement  | STATS                         | none              |
//! | unknown             | OTHER                         | not a request     |
//!
//! Labels and replies are independent side effects: every effect of a branch
//! is attempted, and the first failure is returned afterwards.

use log::{error, info, warn};

use super::messages;
use super::reply_guard::safe_reply;
use crate::core::ServiceError;
use crate::core::models::{Classification, Label, RequestParameters};
use crate::core::ports::{Labeler, Replier, StatsJob, StatsRunner, SubmissionView, SubredditDirectory};

/// Collects the first failure of a sequence of best-effort side effects
#[derive(Debug, Default)]
struct SideEffects {
    first_error: Option<ServiceError>,
}

impl SideEffects {
    fn attempt<T>(&mut self, what: &str, result: Result<T, ServiceError>) {
        if let Err(err) = result {
            warn!("Failed to {what}: {err}");
            self.first_error.get_or_insert(err);
        }
    }

    fn finish(self) -> Result<(), ServiceError> {
        self.first_error.map_or(Ok(()), Err)
    }
}

/// Executes the per-classification actions against the collaborators
pub struct Dispatcher<'a> {
    labeler: &'a dyn Labeler,
    replier: &'a dyn Replier,
    directory: &'a dyn SubredditDirectory,
    stats: &'a dyn StatsRunner,
    subreddit: String,
    operator: String,
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subreddit", &self.subreddit)
            .field("operator", &self.operator)
            .finish_non_exhaustive()
    }
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher posting announcements to `subreddit`
    ///
    /// Bug notices name `operator`.
    #[must_use]
    pub fn new(
        labeler: &'a dyn Labeler,
        replier: &'a dyn Replier,
        directory: &'a dyn SubredditDirectory,
        stats: &'a dyn StatsRunner,
        subreddit: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            labeler,
            replier,
            directory,
            stats,
            subreddit: subreddit.into(),
            operator: operator.into(),
        }
    }

    /// The subreddit announcements are posted to
    #[must_use]
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// Apply the action for `classification` to `submission`
    pub fn handle(
        &self,
        submission: &dyn SubmissionView,
        classification: &Classification,
    ) -> Result<(), ServiceError> {
        match classification {
            Classification::Request(params) => match self.directory.resolve(&params.subreddit_name) {
                Ok(name) => self.satisfy(submission, params, &name),
                Err(err) if err.is_transient() => Err(err),
                Err(err) => {
                    info!("Cannot satisfy request for /r/{}: {err}", params.subreddit_name);
                    self.reject(submission)
                },
            },
            Classification::InvalidRequest => self.reject(submission),
            Classification::StatsAnnouncement => self.labeler.set_label(submission, Label::Stats),
            Classification::Unknown => {
                let mut effects = SideEffects::default();
                effects.attempt("label as other", self.labeler.set_label(submission, Label::Other));
                effects.attempt(
                    "reply to unknown submission",
                    safe_reply(self.replier, submission, messages::NOT_A_REQUEST),
                );
                effects.finish()
            },
        }
    }

    fn reject(&self, submission: &dyn SubmissionView) -> Result<(), ServiceError> {
        let mut effects = SideEffects::default();
        effects.attempt(
            "label as unsatisfiable",
            self.labeler.set_label(submission, Label::Unsatisfiable),
        );
        effects.attempt(
            "reply with usage help",
            safe_reply(self.replier, submission, messages::INVALID_REQUEST),
        );
        effects.finish()
    }

    fn satisfy(
        &self,
        submission: &dyn SubmissionView,
        params: &RequestParameters,
        subreddit: &str,
    ) -> Result<(), ServiceError> {
        let mut effects = SideEffects::default();
        effects.attempt(
            "label as in progress",
            self.labeler.set_label(submission, Label::InProgress),
        );

        let job = StatsJob {
            subreddit: subreddit.to_string(),
            view: params.view,
            submitter_limit: params.submitters(),
            commenter_limit: params.commenters(),
            post_to: self.subreddit.clone(),
        };
        info!("Generating stats for /r/{} ({})", job.subreddit, job.view);

        match self.stats.run(&job) {
            None => {
                error!("Stats generation failed for {}", submission.permalink());
                effects.attempt("label as bug", self.labeler.set_label(submission, Label::Bug));
                effects.attempt(
                    "reply with bug notice",
                    safe_reply(
                        self.replier,
                        submission,
                        &messages::bug_notice(&self.operator),
                    ),
                );
            },
            Some(announcement) => {
                info!("Posted announcement {}", announcement.permalink);
                effects.attempt(
                    "label announcement as stats",
                    self.labeler.set_label(&announcement, Label::Stats),
                );
                effects.attempt(
                    "label as satisfied",
                    self.labeler.set_label(submission, Label::Satisfied),
                );
                effects.attempt(
                    "reply with announcement link",
                    safe_reply(self.replier, submission, &messages::satisfied(&announcement.link())),
                );
            },
        }
        effects.finish()
    }
}
