//! The network seam between `RequestClient` and an HTTP library.
//!
//! A `Transport` performs exactly one round trip for an `HttpRequest`. Any
//! response that arrives, whatever its status, is `Ok`; `Err` is reserved for
//! round trips that never completed. Status interpretation belongs to the
//! client.

use async_trait::async_trait;
use thiserror::Error;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// A round trip that did not produce a response, or a success response whose
/// body could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Minimal async HTTP transport.
///
/// Implement this to plug in another HTTP library, or a recording fake in
/// tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport over `reqwest`.
///
/// No timeout is set; pass a configured `reqwest::Client` through
/// `with_client` to bound request time.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        // An unreadable error body still carries its status; the client
        // falls back to "HTTP Error: {status}" for an empty one.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if !(200..=299).contains(&status) => {
                tracing::debug!(status, error = %e, "failed to read error response body");
                String::new()
            }
            Err(e) => return Err(TransportError::new(e.to_string())),
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
