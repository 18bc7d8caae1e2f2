//! statsbot - Monitors a subreddit and satisfies requests for subreddit stats
//!
//! The bot watches a subreddit's new submissions, classifies each unlabeled
//! one by its title, and labels (flairs) and replies to it accordingly.
//! Well-formed `[request]` submissions trigger a stats report that is posted
//! back to the subreddit as an announcement.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod logging;
pub mod output;
pub mod paths;
pub mod shutdown;
