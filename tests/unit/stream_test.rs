//! Tests for the polling submission stream

use std::time::Duration;

use statsbot::adapters::reddit::{PAGE_SIZE, PollingStream, StreamSettings};
use statsbot::core::ServiceError;
use statsbot::core::models::Submission;
use statsbot::core::ports::SubmissionStream;
use statsbot::shutdown::Shutdown;

use crate::common::fixtures::{MONITORED, submission};
use crate::common::mocks::MockReddit;

const FAST: StreamSettings = StreamSettings {
    poll_interval: Duration::ZERO,
    max_poll_interval: Duration::ZERO,
};

/// Newest-first page, as the listing returns it
fn page(ids: &[&str]) -> Vec<Submission> {
    ids.iter().map(|id| submission(id, &format!("post {id}"))).collect()
}

fn drain(stream: &mut PollingStream<'_>) -> Vec<String> {
    let mut ids = Vec::new();
    while let Some(next) = stream.next_submission().unwrap() {
        ids.push(next.id);
    }
    ids
}

#[test]
fn test_replays_first_page_oldest_first() {
    let shutdown = Shutdown::new();
    let reddit = MockReddit::new().with_page(Ok(page(&["c", "b", "a"]))).stopping(&shutdown);
    let mut stream = PollingStream::new(&reddit, MONITORED, shutdown, FAST);

    assert_eq!(drain(&mut stream), vec!["a", "b", "c"]);
    assert_eq!(reddit.newest_calls.borrow()[0], PAGE_SIZE);
}

#[test]
fn test_yields_each_submission_once_across_polls() {
    let shutdown = Shutdown::new();
    let reddit = MockReddit::new()
        .with_page(Ok(page(&["b", "a"])))
        .with_page(Ok(page(&["d", "c", "b", "a"])))
        .with_page(Ok(page(&["d", "c", "b"])))
        .stopping(&shutdown);
    let mut stream = PollingStream::new(&reddit, MONITORED, shutdown, FAST);

    assert_eq!(drain(&mut stream), vec!["a", "b", "c", "d"]);
    assert_eq!(reddit.newest_calls.borrow().len(), 4);
}

#[test]
fn test_requested_shutdown_interrupts_before_fetching() {
    let shutdown = Shutdown::new();
    shutdown.request();
    let reddit = MockReddit::new().with_page(Ok(page(&["a"])));
    let mut stream = PollingStream::new(&reddit, MONITORED, shutdown, FAST);

    assert!(stream.next_submission().unwrap().is_none());
    assert!(reddit.newest_calls.borrow().is_empty());
}

#[test]
fn test_listing_errors_propagate() {
    let reddit = MockReddit::new().with_page(Err(ServiceError::Unavailable { status: 504 }));
    let mut stream = PollingStream::new(&reddit, MONITORED, Shutdown::new(), FAST);

    assert!(matches!(
        stream.next_submission(),
        Err(ServiceError::Unavailable { status: 504 })
    ));
}

#[test]
fn test_default_settings() {
    let settings = StreamSettings::default();
    assert_eq!(settings.poll_interval, Duration::from_secs(5));
    assert_eq!(settings.max_poll_interval, Duration::from_secs(16));
}
