//! Request descriptor builder
//!
//! Turns validated [`Options`] into the one immutable [`RequestDescriptor`]
//! that every iteration of a run sends.

use std::time::Duration;

use crate::models::options::DEFAULT_METHOD;
use crate::models::Options;

/// Fully assembled outbound request, reused unchanged across iterations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Upper-cased HTTP method
    pub method: String,
    /// Endpoint with the query arguments appended
    pub uri: String,
    /// Transport-level timeout for a single call
    pub timeout: Duration,
    /// Raw header lines in the order they were given
    pub headers: Vec<String>,
    pub body: Option<RequestBody>,
}

/// Request body variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A `multipart/form-data` payload with a single text part.
    ///
    /// Any `--body` value is sent this way for compatibility with older
    /// releases; servers expecting a raw body will see multipart framing.
    SinglePart { name: String, value: String },
}

/// Name of the multipart field carrying `--body`
pub const BODY_PART_NAME: &str = "body";

impl RequestBody {
    fn wrap(value: &str) -> Self {
        RequestBody::SinglePart {
            name: BODY_PART_NAME.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<&Options> for RequestDescriptor {
    fn from(options: &Options) -> Self {
        let method = if options.method.is_empty() {
            DEFAULT_METHOD.to_string()
        } else {
            options.method.to_ascii_uppercase()
        };

        RequestDescriptor {
            method,
            uri: append_arguments(options.endpoint(), &options.arguments),
            timeout: options.timeout(),
            headers: options.headers.clone(),
            body: options
                .body
                .as_deref()
                .filter(|body| !body.is_empty())
                .map(RequestBody::wrap),
        }
    }
}

/// Append `key=value` tokens verbatim: `?` before the first, `&` before the rest.
///
/// Tokens are expected to be URL-encoded already; nothing is escaped here.
pub fn append_arguments(endpoint: &str, arguments: &[String]) -> String {
    let extra: usize = arguments.iter().map(|a| a.len() + 1).sum();
    let mut uri = String::with_capacity(endpoint.len() + extra);
    uri.push_str(endpoint);

    for (index, argument) in arguments.iter().enumerate() {
        uri.push(if index == 0 { '?' } else { '&' });
        uri.push_str(argument);
    }

    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_uri_with_arguments() {
        assert_eq!(append_arguments("https://x", &args(&["a=1", "b=2"])), "https://x?a=1&b=2");
    }

    #[test]
    fn test_uri_without_arguments() {
        assert_eq!(append_arguments("https://x", &[]), "https://x");
    }

    #[test]
    fn test_arguments_are_not_encoded() {
        let uri = append_arguments("https://x/q", &args(&["q=a b", "t=%20"]));
        assert_eq!(uri, "https://x/q?q=a b&t=%20");
    }

    #[test]
    fn test_endpoint_with_existing_query_still_gets_question_mark() {
        let uri = append_arguments("https://x/?a=1", &args(&["b=2"]));
        assert_eq!(uri, "https://x/?a=1?b=2");
    }

    #[test]
    fn test_descriptor_copies_options() {
        let options = Options {
            method: "POST".to_string(),
            headers: args(&["X-User: 1a2b", "X-Client: Seaquest"]),
            timeout_ms: 1500,
            arguments: args(&["k=v"]),
            ..Options::for_endpoint("https://api.example.com/status")
        };

        let descriptor = RequestDescriptor::from(&options);

        assert_eq!(descriptor.method, "POST");
        assert_eq!(descriptor.uri, "https://api.example.com/status?k=v");
        assert_eq!(descriptor.timeout, Duration::from_millis(1500));
        assert_eq!(descriptor.headers, args(&["X-User: 1a2b", "X-Client: Seaquest"]));
        assert_eq!(descriptor.body, None);
    }

    #[test]
    fn test_empty_method_defaults_to_get() {
        let options = Options {
            method: String::new(),
            ..Options::for_endpoint("https://x")
        };
        assert_eq!(RequestDescriptor::from(&options).method, "GET");
    }

    #[test]
    fn test_method_is_upper_cased() {
        let options = Options {
            method: "post".to_string(),
            ..Options::for_endpoint("https://x")
        };
        assert_eq!(RequestDescriptor::from(&options).method, "POST");
    }

    #[test]
    fn test_body_is_wrapped_as_single_part() {
        let options = Options {
            body: Some("{\"a\":1}".to_string()),
            ..Options::for_endpoint("https://x")
        };

        assert_eq!(
            RequestDescriptor::from(&options).body,
            Some(RequestBody::SinglePart {
                name: "body".to_string(),
                value: "{\"a\":1}".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_body_is_no_body() {
        let options = Options {
            body: Some(String::new()),
            ..Options::for_endpoint("https://x")
        };
        assert_eq!(RequestDescriptor::from(&options).body, None);
    }

    #[test]
    fn test_same_options_give_equal_descriptors() {
        let options = Options {
            arguments: args(&["a=1", "b=2"]),
            headers: args(&["Accept: */*"]),
            ..Options::for_endpoint("https://x")
        };

        assert_eq!(RequestDescriptor::from(&options), RequestDescriptor::from(&options));
    }
}
