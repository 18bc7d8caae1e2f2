//! Core domain logic for statsbot
//!
//! This module contains the bot's decision making with no I/O dependencies.
//! All interactions with reddit are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Submission, Classification, Label, View)
//! - `services/` - Classification, reply guard, dispatch, monitor loop
//! - `ports/` - Capability traits for the reddit and stats collaborators
//! - `error` - Errors reported by those collaborators

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::ServiceError;
