//! Request client for the EV analytics backend.
//!
//! # Design
//! `RequestClient` holds only a `base_url` and a `Transport`, and carries no
//! mutable state between calls. A call is split into `build_request`, which
//! produces an `HttpRequest`, the transport round trip, and `parse_response`,
//! which turns the `HttpResponse` into a JSON value or an `ApiError`. The two
//! pure halves are public so the request composition and the error contract
//! can be exercised without I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
use crate::transport::{ReqwestTransport, Transport};

/// Stateless client bound to one base address.
#[derive(Debug, Clone)]
pub struct RequestClient<T = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl RequestClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> RequestClient<T> {
    /// The base address is kept verbatim and prepended to every path.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_request(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let method = options.method.unwrap_or_default();
        let body = match &options.body {
            Some(body) if method.has_body() => Some(serde_json::to_string(body).map_err(|e| {
                ApiError::Serialization {
                    message: e.to_string(),
                }
            })?),
            _ => None,
        };
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: options.merged_headers(),
            body,
        })
    }

    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Perform one round trip and decode the JSON success payload.
    ///
    /// Every failure is logged once here and returned as an `ApiError`.
    /// Nothing is retried.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let method = options.method.unwrap_or_default();
        match self.execute(path, &options).await {
            Ok(value) => {
                tracing::debug!(%method, base_url = %self.base_url, path, "API request succeeded");
                Ok(value)
            }
            Err(err) => Err(log_failure(method, &self.base_url, path, err)),
        }
    }

    async fn execute(&self, path: &str, options: &RequestOptions) -> Result<Value, ApiError> {
        let request = self.build_request(path, options)?;
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Transport { message: e.message })?;
        self.parse_response(response)
    }

    /// `request` followed by a typed decode of the payload.
    pub async fn request_as<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let method = options.method.unwrap_or_default();
        let value = self.request(path, options).await?;
        serde_json::from_value(value)
            .map_err(|e| log_failure(method, &self.base_url, path, e.into()))
    }

    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        self.request(&query_path(path, params), RequestOptions::new())
            .await
    }

    pub async fn get_as<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<R, ApiError> {
        self.request_as(&query_path(path, params), RequestOptions::new())
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
    ) -> Result<Value, ApiError> {
        let options = self.with_body(HttpMethod::Post, path, data)?;
        self.request(path, options).await
    }

    pub async fn post_as<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        data: &B,
    ) -> Result<R, ApiError> {
        let options = self.with_body(HttpMethod::Post, path, data)?;
        self.request_as(path, options).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
    ) -> Result<Value, ApiError> {
        let options = self.with_body(HttpMethod::Put, path, data)?;
        self.request(path, options).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::new().method(HttpMethod::Delete))
            .await
    }

    fn with_body<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        data: &B,
    ) -> Result<RequestOptions, ApiError> {
        let body = serde_json::to_value(data).map_err(|e| {
            let err = ApiError::Serialization {
                message: e.to_string(),
            };
            log_failure(method, &self.base_url, path, err)
        })?;
        Ok(RequestOptions::new().method(method).body(body))
    }
}

fn log_failure(method: HttpMethod, base_url: &str, path: &str, err: ApiError) -> ApiError {
    tracing::error!(%method, base_url, path, error = %err, "API request error");
    err
}

/// Append `params` as a form-encoded query string. An empty list leaves the
/// path untouched, with no trailing `?`.
pub fn query_path(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("{path}?{query}")
}
