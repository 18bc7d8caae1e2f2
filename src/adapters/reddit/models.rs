//! Wire types of the reddit JSON API

use serde::Deserialize;
use serde_json::Value;

use crate::adapters::stats::{Comment, Page};
use crate::core::ServiceError;
use crate::core::models::Submission;

/// A `{"kind": ..., "data": ...}` envelope
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

/// Payload of a `Listing` thing
#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<Thing<T>>,
    #[serde(default)]
    pub after: Option<String>,
}

pub type Listing<T> = Thing<ListingData<T>>;

/// Fields of a `t3` link
#[derive(Debug, Deserialize)]
pub struct LinkData {
    pub name: String,
    pub id: String,
    pub subreddit: String,
    pub title: String,
    pub permalink: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "deleted")]
    pub author: String,
    #[serde(default)]
    pub link_flair_text: Option<String>,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
}

/// Fields of a `t1` comment used by the stats report
#[derive(Debug, Deserialize)]
pub struct CommentData {
    #[serde(default = "deleted")]
    pub author: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub created_utc: f64,
}

fn deleted() -> String {
    "[deleted]".to_string()
}

impl From<LinkData> for Submission {
    fn from(link: LinkData) -> Self {
        Self {
            fullname: link.name,
            id: link.id,
            subreddit: link.subreddit,
            title: link.title,
            permalink: link.permalink,
            url: link.url,
            author: link.author,
            link_flair_text: link.link_flair_text,
            created_utc: link.created_utc,
            score: link.score,
            num_comments: link.num_comments,
        }
    }
}

impl From<CommentData> for Comment {
    fn from(comment: CommentData) -> Self {
        Self {
            author: comment.author,
            score: comment.score,
            created_utc: comment.created_utc,
        }
    }
}

impl<T> Listing<T> {
    /// Convert the children into a page of domain values
    pub fn into_page<U: From<T>>(self) -> Page<U> {
        Page {
            items: self.data.children.into_iter().map(|child| U::from(child.data)).collect(),
            after: self.data.after,
        }
    }
}

/// Response of an `api_type=json` POST
#[derive(Debug, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub json: ApiBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiBody {
    #[serde(default)]
    pub errors: Vec<Vec<Value>>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Error codes returned by the API, e.g. `TOO_OLD`
    pub fn error_codes(&self) -> impl Iterator<Item = &str> {
        self.json.errors.iter().filter_map(|entry| entry.first().and_then(Value::as_str))
    }

    /// Turn the reported errors into a [`ServiceError`]
    ///
    /// `TOO_OLD` anywhere in the list wins, since callers treat it specially.
    pub fn into_result(self) -> Result<Option<Value>, ServiceError> {
        if self.error_codes().any(|code| code == "TOO_OLD") {
            return Err(ServiceError::TooOld);
        }
        match self.json.errors.first() {
            None => Ok(self.json.data),
            Some(entry) => {
                let text = |i: usize| entry.get(i).and_then(Value::as_str).unwrap_or_default().to_string();
                Err(ServiceError::Api {
                    code: text(0),
                    message: text(1),
                })
            },
        }
    }
}

/// Response of the OAuth token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
