//! Reply texts posted by the bot

/// Reply to a title that starts with `[request]` but cannot be satisfied
pub const INVALID_REQUEST: &str = "\
Your request could not be satisfied. Either the title does not follow the \
request format, or the subreddit you asked about does not exist or is not \
accessible to the bot.

Request titles must look like:

    [request] SUBREDDIT VIEW [-cCOMMENTERS] [-sSUBMITTERS]

* `SUBREDDIT` is the name of the subreddit, optionally prefixed with `/r/` \
or `r/`.
* `VIEW` is either a number of days (for example `30`), or one of `all`, \
`day`, `hour`, `month`, `week`, or `year` to use that top listing.
* `-c` sets how many top commenters to show (default 10).
* `-s` sets how many top submitters to show (default 10).

Examples:

    [request] redditdev all
    [request] /r/subreddit_stats 730
    [request] r/python week -c5 -s3

Please submit a new request with a corrected title.";

/// Reply to a submission that is neither a request nor an announcement
pub const NOT_A_REQUEST: &str = "\
This submission does not appear to be a valid request. Request titles must \
begin with `[request]`.";

/// Reply when stats generation failed
#[must_use]
pub fn bug_notice(operator: &str) -> String {
    format!(
        "Sorry, something went wrong while generating the stats for this request. \
         /u/{operator} has been notified and will look into it."
    )
}

/// Reply linking a fulfilled request to its announcement
#[must_use]
pub fn satisfied(announcement_link: &str) -> String {
    format!("Your requested stats are available here: {announcement_link}")
}
