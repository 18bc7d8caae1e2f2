//! Site configuration
//!
//! A config file holds one or more named site profiles; the bot runs with
//! one of them (`--site`, default `statsbot`).
//!
//! ```toml
//! [sites.statsbot]
//! client_id = "..."
//! client_secret = "..."
//! username = "subreddit_stats_bot"
//! password = "..."
//! operator = "bboe"
//! poll_interval_secs = 5
//! ```
//!
//! A custom `request_pattern` is only tried on titles that start with
//! `[request]`, so it must accept that prefix itself.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::reddit::StreamSettings;
use crate::core::services::{GrammarError, RequestGrammar};

/// Profile used when `--site` is not given
pub const DEFAULT_SITE: &str = "statsbot";

/// Errors that can occur when loading the config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The requested site profile is missing
    #[error("site `{0}` is not defined in the config file")]
    UnknownSite(String),

    /// A required setting is empty
    #[error("site `{site}` has an empty `{field}`")]
    MissingField {
        /// Site profile name
        site: String,
        /// Setting name
        field: &'static str,
    },

    /// A setting is present but unusable
    #[error("site `{site}` has an invalid `{field}`: {reason}")]
    InvalidField {
        /// Site profile name
        site: String,
        /// Setting name
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The configured request pattern is unusable
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Contents of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Site profiles keyed by name
    #[serde(default)]
    pub sites: BTreeMap<String, SiteConfig>,
}

/// One site profile
#[derive(Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// OAuth client id of the script application
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Bot account name
    pub username: String,
    /// Bot account password
    pub password: String,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Reddit user named in bug notices
    pub operator: String,
    /// Delay between polls while submissions keep arriving
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Upper bound of the idle polling backoff
    #[serde(default = "default_max_poll_interval")]
    pub max_poll_interval_secs: u64,
    /// Custom request title grammar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_pattern: Option<String>,
}

fn default_user_agent() -> String {
    format!("statsbot/{} (subreddit stats request monitor)", crate::VERSION)
}

const fn default_poll_interval() -> u64 {
    5
}

const fn default_max_poll_interval() -> u64 {
    16
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("operator", &self.operator)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("max_poll_interval_secs", &self.max_poll_interval_secs)
            .field("request_pattern", &self.request_pattern)
            .finish()
    }
}

/// What the reddit client needs to authenticate
#[derive(Clone)]
pub struct Credentials {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
    /// User agent
    pub user_agent: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl GlobalConfig {
    /// Parse config file contents
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Look up and validate a site profile
    pub fn site(&self, name: &str) -> Result<&SiteConfig, ConfigError> {
        let site = self
            .sites
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSite(name.to_string()))?;
        site.validate(name)?;
        Ok(site)
    }
}

impl SiteConfig {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("username", &self.username),
            ("password", &self.password),
            ("operator", &self.operator),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    site: name.to_string(),
                    field,
                });
            }
        }
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidField {
                site: name.to_string(),
                field: "poll_interval_secs",
                reason: "must be at least 1 second",
            });
        }
        Ok(())
    }

    /// Authentication settings for the reddit client
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Polling settings for the submission stream
    #[must_use]
    pub fn stream_settings(&self) -> StreamSettings {
        let poll_interval = Duration::from_secs(self.poll_interval_secs);
        StreamSettings {
            poll_interval,
            max_poll_interval: Duration::from_secs(self.max_poll_interval_secs).max(poll_interval),
        }
    }

    /// The request grammar, custom or default
    pub fn grammar(&self) -> Result<RequestGrammar, ConfigError> {
        match &self.request_pattern {
            Some(pattern) => Ok(RequestGrammar::new(pattern)?),
            None => Ok(RequestGrammar::default()),
        }
    }
}

/// Load `site` from the config file at `path`
pub fn load_site(path: &Path, site: &str) -> Result<SiteConfig, ConfigError> {
    GlobalConfig::load(path)?.site(site).cloned()
}
