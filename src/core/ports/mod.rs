//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the bot's decision logic and
//! reddit (listing, flair, replies, subreddit lookup) and the stats
//! generator.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! Each trait is a single narrow capability so that:
//!
//! - **Testability**: every collaborator can be replaced by a recording mock
//! - **Flexibility**: the HTTP client can change without touching dispatch
//! - **Clarity**: a service's signature says exactly what it may do

mod labeler;
mod replier;
mod stats_runner;
mod submission_source;
mod submission_view;
mod subreddit_directory;

pub use labeler::Labeler;
pub use replier::{ReplyOutcome, Replier};
pub use stats_runner::{StatsJob, StatsRunner};
pub use submission_source::{SubmissionSource, SubmissionStream};
pub use submission_view::SubmissionView;
pub use subreddit_directory::SubredditDirectory;
