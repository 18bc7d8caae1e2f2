//! Parameters of a parsed stats request

/// Number of submitters/commenters shown when a request does not say
pub const DEFAULT_LIMIT: u32 = 10;

/// Named period of a top listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopPeriod {
    /// All time
    All,
    /// Past 24 hours
    Day,
    /// Past hour
    Hour,
    /// Past month
    Month,
    /// Past week
    Week,
    /// Past year
    Year,
}

impl TopPeriod {
    /// Lowercase name, as used by the `t` listing parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Month => "month",
            Self::Week => "week",
            Self::Year => "year",
        }
    }

    /// Approximate length in seconds, `None` for `all`
    #[must_use]
    pub const fn seconds(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Day => Some(86_400),
            Self::Hour => Some(3_600),
            Self::Month => Some(30 * 86_400),
            Self::Week => Some(7 * 86_400),
            Self::Year => Some(365 * 86_400),
        }
    }
}

impl std::fmt::Display for TopPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TopPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "day" => Ok(Self::Day),
            "hour" => Ok(Self::Hour),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "year" => Ok(Self::Year),
            _ => Err(format!("Invalid period: {s}. Use: all, day, hour, month, week, year")),
        }
    }
}

/// Reporting window of a stats request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// The last `n` days of new submissions
    Days(u32),
    /// A top listing period
    Period(TopPeriod),
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}"),
            Self::Period(period) => write!(f, "{period}"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u32>()
                .map(Self::Days)
                .map_err(|_| format!("Day count out of range: {s}"));
        }
        s.parse::<TopPeriod>().map(Self::Period)
    }
}

/// A fully parsed `[request]` title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    /// Subreddit to generate stats for, without any `/r/` prefix
    pub subreddit_name: String,
    /// Reporting window
    pub view: View,
    /// Number of top commenters to show, if given
    pub commenter_limit: Option<u32>,
    /// Number of top submitters to show, if given
    pub submitter_limit: Option<u32>,
}

impl RequestParameters {
    /// Create parameters with default limits
    #[must_use]
    pub fn new(subreddit_name: impl Into<String>, view: View) -> Self {
        Self {
            subreddit_name: subreddit_name.into(),
            view,
            commenter_limit: None,
            submitter_limit: None,
        }
    }

    /// Commenter limit, or [`DEFAULT_LIMIT`]
    #[must_use]
    pub fn commenters(&self) -> u32 {
        self.commenter_limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Submitter limit, or [`DEFAULT_LIMIT`]
    #[must_use]
    pub fn submitters(&self) -> u32 {
        self.submitter_limit.unwrap_or(DEFAULT_LIMIT)
    }
}
