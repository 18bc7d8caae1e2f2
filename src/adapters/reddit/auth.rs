//! OAuth2 password-grant authentication for script applications

use std::cell::RefCell;
use std::time::{Duration, Instant};

use log::debug;
use reqwest::blocking::Client;

use super::models::TokenResponse;
use crate::config::Credentials;
use crate::core::ServiceError;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Refresh this long before the token actually expires
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Fetches and caches bearer tokens
#[derive(Debug)]
pub struct Authenticator {
    credentials: Credentials,
    token: RefCell<Option<AccessToken>>,
}

impl Authenticator {
    pub const fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: RefCell::new(None),
        }
    }

    /// A valid bearer token, fetching a new one when needed
    pub fn bearer(&self, http: &Client) -> Result<String, ServiceError> {
        let cached = self.token.borrow().clone();
        if let Some(token) = cached.filter(|t| Instant::now() + EXPIRY_MARGIN < t.expires_at) {
            return Ok(token.value);
        }
        let token = self.fetch(http)?;
        let value = token.value.clone();
        *self.token.borrow_mut() = Some(token);
        Ok(value)
    }

    /// Forget the cached token after it was rejected
    pub fn invalidate(&self) {
        self.token.borrow_mut().take();
    }

    fn fetch(&self, http: &Client) -> Result<AccessToken, ServiceError> {
        debug!("Requesting access token for /u/{}", self.credentials.username);
        let response = http
            .post(TOKEN_URL)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .map_err(super::client::map_transport)?;

        let status = response.status().as_u16();
        if status == 401 {
            return Err(ServiceError::Auth("invalid client id or secret".to_string()));
        }
        if !response.status().is_success() {
            return Err(ServiceError::from_status(status, TOKEN_URL));
        }

        let body: TokenResponse = response.json().map_err(super::client::map_transport)?;
        match (body.access_token, body.error) {
            (Some(value), None) => Ok(AccessToken {
                value,
                expires_at: Instant::now() + Duration::from_secs(body.expires_in.unwrap_or(3600)),
            }),
            (_, Some(error)) => Err(ServiceError::Auth(error)),
            (None, None) => Err(ServiceError::Decode("token response without access_token".to_string())),
        }
    }
}
