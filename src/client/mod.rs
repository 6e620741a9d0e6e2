//! HTTP client functionality

pub mod http;
pub mod types;

// Re-exports
pub use http::{parse_header_line, HttpTransport, Transport, USER_AGENT_STRING};
pub use types::{HttpResponse, TransportError};
