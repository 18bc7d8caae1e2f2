//! Blocking reddit API client
//!
//! Implements every reddit-facing port: listing and streaming submissions,
//! resolving subreddits, setting flair, replying, plus the listing and
//! submit calls the stats runner needs.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::auth::Authenticator;
use super::models::{ApiResponse, CommentData, LinkData, Listing, Thing};
use super::stream::{PollingStream, StreamSettings};
use crate::adapters::stats::{Comment, Page, StatsData};
use crate::config::Credentials;
use crate::core::ServiceError;
use crate::core::models::{Label, Submission, View};
use crate::core::ports::{
    Labeler, ReplyOutcome, Replier, SubmissionSource, SubmissionStream, SubmissionView,
    SubredditDirectory,
};
use crate::shutdown::Shutdown;

const API_BASE: &str = "https://oauth.reddit.com";

/// Largest page the listing endpoints return
pub const PAGE_SIZE: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Map a reqwest failure onto the service error taxonomy
pub fn map_transport(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else if err.is_decode() {
        ServiceError::Decode(err.to_string())
    } else if let Some(status) = err.status() {
        ServiceError::from_status(status.as_u16(), err.url().map_or("", |url| url.path()))
    } else {
        ServiceError::Transport(err.to_string())
    }
}

/// Authenticated client for one reddit account
#[derive(Debug)]
pub struct RedditClient {
    http: Client,
    auth: Authenticator,
    username: String,
    shutdown: Shutdown,
    stream_settings: StreamSettings,
}

impl RedditClient {
    /// Build a client; no request is made until first use
    pub fn new(credentials: Credentials) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .user_agent(credentials.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(map_transport)?;
        Ok(Self {
            http,
            username: credentials.username.clone(),
            auth: Authenticator::new(credentials),
            shutdown: Shutdown::new(),
            stream_settings: StreamSettings::default(),
        })
    }

    /// Configure how streams poll and how they are interrupted
    #[must_use]
    pub fn with_stream(mut self, settings: StreamSettings, shutdown: Shutdown) -> Self {
        self.stream_settings = settings;
        self.shutdown = shutdown;
        self
    }

    fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        form: Option<&[(&str, &str)]>,
    ) -> Result<T, ServiceError> {
        let url = format!("{API_BASE}{path}");
        // One retry with a fresh token if the cached one was revoked
        for attempt in 0..2 {
            let token = self.auth.bearer(&self.http)?;
            let mut request = self
                .http
                .request(method.clone(), &url)
                .bearer_auth(token)
                .query(&[("raw_json", "1")])
                .query(query);
            if let Some(form) = form {
                request = request.form(form);
            }
            debug!("{method} {path}");
            let response = request.send().map_err(map_transport)?;
            let status = response.status();
            if status == StatusCode::UNAUTHORIZED && attempt == 0 {
                self.auth.invalidate();
                continue;
            }
            if !status.is_success() {
                return Err(ServiceError::from_status(status.as_u16(), path));
            }
            return response.json::<T>().map_err(map_transport);
        }
        Err(ServiceError::Auth(format!("token rejected for {path}")))
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ServiceError> {
        self.execute(&Method::GET, path, query, None)
    }

    fn post(&self, path: &str, form: &[(&str, &str)]) -> Result<ApiResponse, ServiceError> {
        self.execute(&Method::POST, path, &[], Some(form))
    }

    fn page<T, U>(
        &self,
        path: &str,
        limit: usize,
        after: Option<&str>,
        extra: &[(&str, String)],
    ) -> Result<Page<U>, ServiceError>
    where
        T: DeserializeOwned,
        U: From<T>,
    {
        let mut query = vec![("limit", limit.min(PAGE_SIZE).to_string())];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }
        query.extend(extra.iter().cloned());
        let listing: Listing<T> = self.get(path, &query)?;
        Ok(listing.into_page())
    }
}

impl Labeler for RedditClient {
    fn set_label(&self, submission: &dyn SubmissionView, label: Label) -> Result<(), ServiceError> {
        let path = format!("/r/{}/api/flair", submission.subreddit());
        self.post(
            &path,
            &[
                ("api_type", "json"),
                ("link", submission.fullname()),
                ("text", label.as_str()),
                ("css_class", ""),
            ],
        )?
        .into_result()
        .map(|_| ())
    }
}

impl Replier for RedditClient {
    fn reply(&self, submission: &dyn SubmissionView, body: &str) -> ReplyOutcome {
        let result = self
            .post(
                "/api/comment",
                &[("api_type", "json"), ("thing_id", submission.fullname()), ("text", body)],
            )
            .and_then(ApiResponse::into_result);
        match result {
            Ok(_) => ReplyOutcome::Posted,
            Err(ServiceError::TooOld) => ReplyOutcome::TooOldToReply,
            Err(err) => ReplyOutcome::Failed(err),
        }
    }
}

impl SubredditDirectory for RedditClient {
    fn resolve(&self, name: &str) -> Result<String, ServiceError> {
        let about: Thing<Value> = self.get(&format!("/r/{name}/about"), &[])?;
        // Unknown names redirect to a search listing instead of a 404
        if about.kind != "t5" {
            return Err(ServiceError::NotFound(format!("/r/{name}")));
        }
        about
            .data
            .get("display_name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ServiceError::Decode(format!("/r/{name}/about lacks display_name")))
    }
}

impl SubmissionSource for RedditClient {
    fn stream(&self, subreddit: &str) -> Result<Box<dyn SubmissionStream + '_>, ServiceError> {
        Ok(Box::new(PollingStream::new(
            self,
            subreddit,
            self.shutdown.clone(),
            self.stream_settings,
        )))
    }

    fn newest(&self, subreddit: &str, limit: usize) -> Result<Vec<Submission>, ServiceError> {
        let path = format!("/r/{subreddit}/new");
        let mut submissions = Vec::with_capacity(limit);
        let mut after: Option<String> = None;
        while submissions.len() < limit {
            let page: Page<Submission> =
                self.page::<LinkData, _>(&path, limit - submissions.len(), after.as_deref(), &[])?;
            let exhausted = page.items.is_empty() || page.after.is_none();
            submissions.extend(page.items);
            after = page.after;
            if exhausted {
                break;
            }
        }
        submissions.truncate(limit);
        Ok(submissions)
    }
}

impl StatsData for RedditClient {
    fn submissions(
        &self,
        subreddit: &str,
        view: View,
        after: Option<&str>,
    ) -> Result<Page<Submission>, ServiceError> {
        match view {
            View::Period(period) => self.page::<LinkData, _>(
                &format!("/r/{subreddit}/top"),
                PAGE_SIZE,
                after,
                &[("t", period.as_str().to_string())],
            ),
            View::Days(_) => self.page::<LinkData, _>(&format!("/r/{subreddit}/new"), PAGE_SIZE, after, &[]),
        }
    }

    fn comments(&self, subreddit: &str, after: Option<&str>) -> Result<Page<Comment>, ServiceError> {
        self.page::<CommentData, _>(&format!("/r/{subreddit}/comments"), PAGE_SIZE, after, &[])
    }

    fn submit(&self, subreddit: &str, title: &str, body: &str) -> Result<Submission, ServiceError> {
        let data = self
            .post(
                "/api/submit",
                &[
                    ("api_type", "json"),
                    ("kind", "self"),
                    ("sr", subreddit),
                    ("title", title),
                    ("text", body),
                    ("resubmit", "true"),
                ],
            )?
            .into_result()?
            .ok_or_else(|| ServiceError::Decode("submit response without data".to_string()))?;

        let field = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);
        let name = field("name").ok_or_else(|| ServiceError::Decode("submit response without name".to_string()))?;
        let mut submission = Submission::new(name, subreddit, title);
        if let Some(url) = field("url") {
            submission.permalink = url.strip_prefix("https://www.reddit.com").unwrap_or(&url).to_string();
            submission.url = url;
        }
        submission.author.clone_from(&self.username);
        submission.created_utc = chrono::Utc::now().timestamp() as f64;
        Ok(submission)
    }
}
