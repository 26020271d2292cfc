use async_trait::async_trait;
use fixture_core::{
    error::{FixtureError, Result},
    http::HttpClient,
    models::Response,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::reqwest_error_to_fixture_error;

/// reqwest implementation of the HttpClient trait
///
/// Sends exactly one request per call. Non-success statuses are rejected
/// here, before the body is read, so callers see `FixtureError::Status`
/// whether the server sent JSON or not.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with reqwest's default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured reqwest client (proxies, TLS roots, headers)
    ///
    /// # Examples
    /// ```rust
    /// use transport::ReqwestHttpClient;
    ///
    /// let inner = reqwest::Client::builder()
    ///     .user_agent("fixtures/0.2")
    ///     .build()
    ///     .unwrap();
    /// let client = ReqwestHttpClient::with_client(inner);
    /// ```
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response<Value>> {
        debug!(url, "Sending GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest_error_to_fixture_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Server returned non-success status");
            return Err(FixtureError::Status(status.as_u16()));
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(reqwest_error_to_fixture_error)?;

        debug!(url, status = status.as_u16(), "GET request completed");
        Ok(Response::with_status(status.as_u16(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ReqwestHttpClient::new();
        let url = format!("http://127.0.0.1:{port}/users");
        let error = client.get(&url).await.unwrap_err();
        assert!(error.is_transport(), "unexpected error: {error:?}");
    }

    #[tokio::test]
    async fn test_malformed_url_is_not_sent() {
        let client = ReqwestHttpClient::new();
        let error = client.get("not a url").await.unwrap_err();
        assert!(matches!(error, FixtureError::Configuration(_)), "unexpected error: {error:?}");
    }
}
