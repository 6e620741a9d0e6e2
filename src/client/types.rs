//! Values produced by a transport call

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// A received HTTP response with its body fully read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header name/value pairs in the order the server sent them
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Why a single call produced no response.
///
/// These are recorded per iteration and never stop the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid URL '{uri}': {reason}")]
    InvalidUrl { uri: String, reason: String },

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid header '{line}': {reason}")]
    InvalidHeader { line: String, reason: String },

    #[error("Timeout after {}ms", .after.as_millis())]
    Timeout { after: Duration },

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Error reading response body: {0}")]
    Body(String),

    #[error("Request error: {0}")]
    Other(String),
}

impl TransportError {
    /// Classify a reqwest failure for a call made with `timeout`
    pub fn from_reqwest(error: &reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            TransportError::Timeout { after: timeout }
        } else if error.is_connect() {
            TransportError::Connect(ErrorChain(error).to_string())
        } else if error.is_body() || error.is_decode() {
            TransportError::Body(ErrorChain(error).to_string())
        } else {
            TransportError::Other(ErrorChain(error).to_string())
        }
    }
}

/// Displays an error followed by each of its sources
struct ErrorChain<'a>(&'a dyn std::error::Error);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}
