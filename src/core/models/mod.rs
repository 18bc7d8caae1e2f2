//! Domain models for statsbot
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Submission`] - A post in the monitored subreddit
//! - [`Classification`] - What a submission's title says it is
//! - [`RequestParameters`] - The structured part of a `[request]` title
//! - [`Label`] - Flair text the bot uses as its state marker

mod classification;
mod label;
mod request;
mod submission;

pub use classification::Classification;
pub use label::Label;
pub use request::{DEFAULT_LIMIT, RequestParameters, TopPeriod, View};
pub use submission::Submission;
