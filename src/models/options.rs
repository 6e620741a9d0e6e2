//! The validated options record handed to the request pipeline

use std::time::Duration;

/// Default HTTP method when none is given
pub const DEFAULT_METHOD: &str = "GET";

/// Default transport timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of iterations
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Default pause between iterations in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 1_000;

/// Default number of body characters shown before truncating
pub const DEFAULT_RESPONSE_LIMIT: usize = 5_120;

/// Everything one invocation needs, immutable once parsed.
///
/// `endpoint` is only `None` on the help path; [`Options::endpoint`]
/// is what the request pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub endpoint: Option<String>,
    pub method: String,
    /// Pre-encoded `key=value` tokens, appended to the query in order
    pub arguments: Vec<String>,
    /// Raw `Name: value` header lines, passed through unvalidated
    pub headers: Vec<String>,
    pub timeout_ms: u64,
    pub body: Option<String>,
    pub iterations: u32,
    pub iterations_interval_ms: u64,
    pub uncut_response: bool,
    pub response_limit: usize,
    pub response_json: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            endpoint: None,
            method: DEFAULT_METHOD.to_string(),
            arguments: Vec::new(),
            headers: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            body: None,
            iterations: DEFAULT_ITERATIONS,
            iterations_interval_ms: DEFAULT_INTERVAL_MS,
            uncut_response: false,
            response_limit: DEFAULT_RESPONSE_LIMIT,
            response_json: false,
            verbose: false,
            help: false,
        }
    }
}

impl Options {
    /// Options for a plain call to `endpoint` with every other field defaulted
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Target endpoint, empty on the help path
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.iterations_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.method, "GET");
        assert_eq!(options.timeout_ms, 30_000);
        assert_eq!(options.iterations, 1);
        assert_eq!(options.iterations_interval_ms, 1_000);
        assert_eq!(options.response_limit, 5_120);
        assert!(!options.uncut_response);
        assert!(!options.response_json);
        assert!(!options.verbose);
        assert!(!options.help);
        assert!(options.arguments.is_empty());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_durations() {
        let options = Options {
            timeout_ms: 250,
            iterations_interval_ms: 10,
            ..Options::for_endpoint("https://x")
        };
        assert_eq!(options.timeout(), Duration::from_millis(250));
        assert_eq!(options.interval(), Duration::from_millis(10));
        assert_eq!(options.endpoint(), "https://x");
    }
}
