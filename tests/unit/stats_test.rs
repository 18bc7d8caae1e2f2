//! Tests for stats collection and announcement posting

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::{TimeZone, Utc};
use statsbot::adapters::stats::{Comment, Page, StatsData, StatsError, SubredditStats};
use statsbot::core::ServiceError;
use statsbot::core::models::{Submission, TopPeriod, View};
use statsbot::core::ports::{StatsJob, StatsRunner};
use statsbot::core::services::classify;

use crate::common::fixtures::{MONITORED, authored, submission};

const NOW: i64 = 1_600_000_000;
const DAY: i64 = 86_400;

/// Scripted listings; an exhausted script serves an empty last page
#[derive(Default)]
struct FakeData {
    submission_pages: RefCell<VecDeque<Page<Submission>>>,
    comment_pages: RefCell<VecDeque<Page<Comment>>>,
    submission_requests: RefCell<Vec<(View, Option<String>)>>,
    posted: RefCell<Vec<(String, String, String)>>,
    submit_error: Option<fn() -> ServiceError>,
}

impl FakeData {
    fn with_submissions(self, items: Vec<Submission>, after: Option<&str>) -> Self {
        self.submission_pages.borrow_mut().push_back(Page {
            items,
            after: after.map(str::to_string),
        });
        self
    }

    fn with_comments(self, items: Vec<Comment>) -> Self {
        self.comment_pages.borrow_mut().push_back(Page { items, after: None });
        self
    }
}

impl StatsData for FakeData {
    fn submissions(
        &self,
        _subreddit: &str,
        view: View,
        after: Option<&str>,
    ) -> Result<Page<Submission>, ServiceError> {
        self.submission_requests
            .borrow_mut()
            .push((view, after.map(str::to_string)));
        Ok(self.submission_pages.borrow_mut().pop_front().unwrap_or(Page {
            items: Vec::new(),
            after: None,
        }))
    }

    fn comments(&self, _subreddit: &str, _after: Option<&str>) -> Result<Page<Comment>, ServiceError> {
        Ok(self.comment_pages.borrow_mut().pop_front().unwrap_or(Page {
            items: Vec::new(),
            after: None,
        }))
    }

    fn submit(&self, subreddit: &str, title: &str, body: &str) -> Result<Submission, ServiceError> {
        if let Some(error) = self.submit_error {
            return Err(error());
        }
        self.posted
            .borrow_mut()
            .push((subreddit.to_string(), title.to_string(), body.to_string()));
        Ok(submission("announcement", title))
    }
}

fn job(view: View) -> StatsJob {
    StatsJob {
        subreddit: "rust".to_string(),
        view,
        submitter_limit: 10,
        commenter_limit: 10,
        post_to: MONITORED.to_string(),
    }
}

fn comment(author: &str, score: i64, created_utc: i64) -> Comment {
    Comment {
        author: author.to_string(),
        score,
        created_utc: created_utc as f64,
    }
}

#[test]
fn test_day_view_stops_at_window_start() {
    let data = FakeData::default()
        .with_submissions(
            vec![
                authored("a", "alice", 5, NOW - 100),
                authored("b", "bob", 2, NOW - 2 * DAY),
                authored("c", "carol", 9, NOW - 3 * DAY),
            ],
            Some("t3_c"),
        )
        .with_comments(vec![
            comment("bob", 1, NOW - 50),
            comment("alice", 4, NOW - 60),
            comment("dave", 3, NOW - 5 * DAY),
        ]);
    let stats = SubredditStats::new(&data);
    let now = Utc.timestamp_opt(NOW, 0).unwrap();

    let announcement = stats.generate(&job(View::Days(1)), now).unwrap();

    let posted = data.posted.borrow();
    assert_eq!(posted.len(), 1);
    let (subreddit, title, body) = &posted[0];
    assert_eq!(subreddit, MONITORED);
    assert_eq!(title, "Subreddit Stats: rust (2020-09-12 to 2020-09-13)");
    assert!(body.contains("* 1 submissions"));
    assert!(body.contains("* 2 comments"));
    assert!(body.contains("| 1 | /u/alice | 1 | 5 |"));
    assert!(!body.contains("carol"));
    assert!(!body.contains("dave"));
    assert_eq!(announcement.title, *title);
    // Only the first page was needed
    assert_eq!(data.submission_requests.borrow().len(), 1);
}

#[test]
fn test_announcement_title_is_a_stats_announcement() {
    let data = FakeData::default().with_submissions(vec![authored("a", "alice", 1, NOW - 10)], None);
    let stats = SubredditStats::new(&data);

    let announcement = stats
        .generate(&job(View::Period(TopPeriod::Week)), Utc.timestamp_opt(NOW, 0).unwrap())
        .unwrap();

    assert_eq!(classify(&announcement.title).kind(), "stats");
}

#[test]
fn test_unbounded_view_starts_at_oldest_submission() {
    let data = FakeData::default().with_submissions(
        vec![
            authored("a", "alice", 10, NOW - DAY),
            authored("b", "bob", 50, NOW - 400 * DAY),
        ],
        None,
    );
    let stats = SubredditStats::new(&data);

    stats
        .generate(&job(View::Period(TopPeriod::All)), Utc.timestamp_opt(NOW, 0).unwrap())
        .unwrap();

    let posted = data.posted.borrow();
    assert_eq!(posted[0].1, "Subreddit Stats: rust (2019-08-10 to 2020-09-13)");
    assert!(posted[0].2.contains("* 2 submissions"));
}

#[test]
fn test_period_view_follows_pagination() {
    let data = FakeData::default()
        .with_submissions(vec![authored("a", "alice", 3, NOW - 10)], Some("t3_a"))
        .with_submissions(vec![authored("b", "alice", 4, NOW - 20)], None);
    let stats = SubredditStats::new(&data);

    stats
        .generate(&job(View::Period(TopPeriod::Day)), Utc.timestamp_opt(NOW, 0).unwrap())
        .unwrap();

    let requests = data.submission_requests.borrow();
    assert_eq!(
        *requests,
        vec![
            (View::Period(TopPeriod::Day), None),
            (View::Period(TopPeriod::Day), Some("t3_a".to_string())),
        ]
    );
    assert!(data.posted.borrow()[0].2.contains("| 1 | /u/alice | 2 | 7 |"));
}

#[test]
fn test_empty_window_is_an_error() {
    let data = FakeData::default();
    let stats = SubredditStats::new(&data);

    let result = stats.generate(&job(View::Days(7)), Utc.timestamp_opt(NOW, 0).unwrap());

    assert!(matches!(result, Err(StatsError::Empty(ref sr)) if sr == "rust"));
    assert!(data.posted.borrow().is_empty());
}

#[test]
fn test_runner_returns_none_when_nothing_to_report() {
    let data = FakeData::default();
    assert!(SubredditStats::new(&data).run(&job(View::Days(7))).is_none());
}

#[test]
fn test_runner_returns_none_when_posting_fails() {
    let now = Utc::now().timestamp();
    let data = FakeData {
        submit_error: Some(|| ServiceError::Forbidden("/api/submit".to_string())),
        ..FakeData::default()
    }
    .with_submissions(vec![authored("a", "alice", 1, now - 10)], None);

    assert!(SubredditStats::new(&data).run(&job(View::Days(7))).is_none());
}

#[test]
fn test_runner_returns_announcement() {
    let now = Utc::now().timestamp();
    let data = FakeData::default().with_submissions(vec![authored("a", "alice", 1, now - 10)], None);

    let announcement = SubredditStats::new(&data).run(&job(View::Days(7))).unwrap();

    assert_eq!(announcement.fullname, "t3_announcement");
    assert!(announcement.title.starts_with("Subreddit Stats: rust ("));
}
