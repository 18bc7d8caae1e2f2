//! Result of classifying a submission title

use super::RequestParameters;

/// What a submission is, judged by its title alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A well-formed stats request
    Request(RequestParameters),
    /// Starts with `[request]` but does not follow the grammar
    InvalidRequest,
    /// A stats report posted by the bot
    StatsAnnouncement,
    /// Anything else
    Unknown,
}

impl Classification {
    /// Short name used in log lines
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::InvalidRequest => "invalid request",
            Self::StatsAnnouncement => "stats",
            Self::Unknown => "unknown",
        }
    }
}
