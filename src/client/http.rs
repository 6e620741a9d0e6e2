//! reqwest-backed transport
//!
//! One call per iteration; idle connections are never kept, so every
//! iteration opens its own connection.

use std::future::Future;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use super::types::{HttpResponse, TransportError};
use crate::errors::SeaquestError;
use crate::request::{RequestBody, RequestDescriptor};

pub const USER_AGENT_STRING: &str = concat!("Seaquest/", env!("CARGO_PKG_VERSION"));

/// Something that can carry a [`RequestDescriptor`] to a server
pub trait Transport {
    /// Issue one request and wait for its full response or its failure
    fn send(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Transport over a reqwest [`Client`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, SeaquestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT_STRING)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| SeaquestError::Client(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    fn prepare(&self, request: &RequestDescriptor) -> Result<reqwest::RequestBuilder, TransportError> {
        let url = Url::parse(&request.uri).map_err(|e| TransportError::InvalidUrl {
            uri: request.uri.clone(),
            reason: e.to_string(),
        })?;

        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        let mut builder = self.client.request(method, url).timeout(request.timeout);

        for line in &request.headers {
            let (name, value) = parse_header_line(line)?;
            builder = builder.header(name, value);
        }

        if let Some(RequestBody::SinglePart { name, value }) = &request.body {
            builder = builder.multipart(Form::new().text(name.clone(), value.clone()));
        }

        Ok(builder)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<HttpResponse, TransportError> {
        let builder = self.prepare(request)?;

        debug!(method = %request.method, uri = %request.uri, "Sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e, request.timeout))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(&e, request.timeout))?;

        Ok(HttpResponse { status, headers, body })
    }
}

/// Split a raw `Name: value` line at its first colon
pub fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), TransportError> {
    let invalid = |reason: &str| TransportError::InvalidHeader {
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let (name, value) = line.split_once(':').ok_or_else(|| invalid("expected 'Name: value'"))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| invalid(&e.to_string()))?;
    let value = HeaderValue::from_str(value.trim()).map_err(|e| invalid(&e.to_string()))?;

    Ok((name, value))
}
