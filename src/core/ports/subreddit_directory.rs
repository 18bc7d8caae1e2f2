//! Subreddit lookup capability

use crate::core::ServiceError;

/// Resolves subreddit names
pub trait SubredditDirectory {
    /// Resolve `name` to its canonical display name
    ///
    /// Fails with [`ServiceError::NotFound`] or [`ServiceError::Forbidden`]
    /// when the subreddit cannot be used as a stats target.
    fn resolve(&self, name: &str) -> Result<String, ServiceError>;
}
