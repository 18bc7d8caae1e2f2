//! Reddit API adapter
//!
//! - [`RedditClient`] - OAuth client implementing the reddit-facing ports
//! - [`PollingStream`] - New-submission stream built on repeated listing
//!
//! All calls are blocking; the bot processes one submission at a time.

mod auth;
mod client;
mod models;
mod stream;

pub use client::{PAGE_SIZE, RedditClient, map_transport};
pub use stream::{PollingStream, StreamSettings};
