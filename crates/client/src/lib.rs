pub mod course;
mod token;

use std::time::Duration;

use log::debug;
use reqwest::{
    blocking::{RequestBuilder, Response},
    Method,
};
use serde::Deserialize;
use thiserror::Error;

pub use reqwest::StatusCode;
pub use token::Token;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Where the catalog server lives unless told otherwise
pub const DEFAULT_BASE: &str = "https://course-app-server-five.vercel.app/";

/// How long a single request may take before we give up on it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client, for using the course catalog's admin API
#[derive(Clone)]
pub struct Client {
    base: String,
    token: Option<Token>,
    http: reqwest::blocking::Client,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("server responded with {} for {}", .0, .1)]
    Status(StatusCode, String),

    #[error("http error: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("serde error: {}", .0)]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// The HTTP status the server gave, if we got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status(s, _) => Some(*s),
            Error::Http(e) => e.status(),
            Error::Serde(_) => None,
        }
    }
}

impl Client {
    pub fn new(base: impl Into<String>, token: Option<Token>) -> Result<Self> {
        Self::with_timeout(base, token, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests are abandoned after `timeout`
    pub fn with_timeout(
        base: impl Into<String>,
        token: Option<Token>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { base, token, http })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Start building a request, with authorization attached if we have it
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        match &self.token {
            Some(t) => req.bearer_auth(t.as_ref()),
            None => req,
        }
    }

    /// Send a request, turning non-success statuses into errors
    pub(crate) fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send()?;
        let status = resp.status();
        debug!("{} {}", status, resp.url());
        if !status.is_success() {
            return Err(Error::Status(status, resp.url().to_string()));
        }

        Ok(resp)
    }

    pub(crate) fn get<T: for<'a> Deserialize<'a>>(&self, path: &str) -> Result<T> {
        let resp = self.send(self.request(Method::GET, path))?;
        if log::log_enabled!(log::Level::Debug) {
            let s = resp.text()?;
            debug!("response: {}", s);
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(resp.json()?)
        }
    }
}
