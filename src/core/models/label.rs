//! Bot-assigned flair labels
//!
//! Labels are the only state the bot keeps, and they live on reddit.

/// Flair text the bot assigns to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// A stats request is being processed
    InProgress,
    /// A stats request was fulfilled
    Satisfied,
    /// A request could not be parsed or targets an unknown subreddit
    Unsatisfiable,
    /// Stats generation failed
    Bug,
    /// A stats announcement
    Stats,
    /// Anything that is neither a request nor an announcement
    Other,
}

impl Label {
    /// Every label, in the order they are listed in the subreddit sidebar
    pub const ALL: [Self; 6] = [
        Self::InProgress,
        Self::Satisfied,
        Self::Unsatisfiable,
        Self::Bug,
        Self::Stats,
        Self::Other,
    ];

    /// The exact flair text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "IN PROGRESS",
            Self::Satisfied => "SATISFIED",
            Self::Unsatisfiable => "UNSATISFIABLE",
            Self::Bug => "BUG",
            Self::Stats => "STATS",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid label: {s}"))
    }
}
