//! Business logic services
//!
//! Decision logic that only talks to the outside world through port traits.
//!
//! - [`classifier`] - Map a submission title to a [`Classification`]
//! - [`reply_guard`] - Post replies, tolerating archived submissions
//! - [`dispatcher`] - Apply the labels and replies for a classification
//! - [`monitor`] - Drive the submission stream through the dispatcher
//! - [`messages`] - Reply texts
//!
//! [`Classification`]: crate::core::models::Classification

pub mod classifier;
pub mod dispatcher;
pub mod messages;
pub mod monitor;
pub mod reply_guard;

pub use classifier::{Classifier, GrammarError, RequestGrammar, classify};
pub use dispatcher::Dispatcher;
pub use monitor::{Monitor, MonitorState};
pub use reply_guard::safe_reply;
