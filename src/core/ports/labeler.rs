//! Flair-setting capability

use super::SubmissionView;
use crate::core::ServiceError;
use crate::core::models::Label;

/// Assigns bot labels to submissions
pub trait Labeler {
    /// Replace the submission's flair with `label`
    fn set_label(&self, submission: &dyn SubmissionView, label: Label) -> Result<(), ServiceError>;
}
