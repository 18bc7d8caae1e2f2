//! Reply guard - posts replies, absorbing only the "too old" refusal
//!
//! Archived submissions cannot be replied to; that is expected and only
//! logged. Every other failure is returned to the caller.

use log::{debug, info};

use crate::core::ServiceError;
use crate::core::ports::{ReplyOutcome, Replier, SubmissionView};

/// Reply to `submission` with `message`
///
/// Returns `Ok(true)` when the comment was posted and `Ok(false)` when the
/// submission was too old to reply to.
pub fn safe_reply(
    replier: &dyn Replier,
    submission: &dyn SubmissionView,
    message: &str,
) -> Result<bool, ServiceError> {
    match replier.reply(submission, message) {
        ReplyOutcome::Posted => {
            debug!("Replied to {}", submission.permalink());
            Ok(true)
        },
        ReplyOutcome::TooOldToReply => {
            info!("Submission {} is too old to reply to", submission.permalink());
            Ok(false)
        },
        ReplyOutcome::Failed(err) => Err(err),
    }
}
