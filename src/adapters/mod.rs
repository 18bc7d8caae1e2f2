//! Adapter implementations for port traits
//!
//! This module contains the implementations that talk to the network:
//!
//! - `reddit/` - OAuth client, listings, flair, replies, submission stream
//! - `stats/` - Stats report generation on top of the reddit client

pub mod reddit;
pub mod stats;
