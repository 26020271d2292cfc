use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{error::Result, models::Response};

/// The substitution point for outbound HTTP.
///
/// [`crate::users::Users`] performs its single GET through this trait, so a
/// test can hand it a deterministic stand-in instead of a network client.
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and return the JSON body in an envelope
    ///
    /// # Arguments
    /// * `url` - Absolute URL to fetch
    ///
    /// # Returns
    /// * `Ok(Response<Value>)` - The status and parsed JSON body
    /// * `Err(FixtureError::Transport)` - If no response was received
    /// * `Err(FixtureError::Status)` - If the implementation rejects non-success statuses itself
    /// * `Err(FixtureError::Decode)` - If the body is not JSON
    async fn get(&self, url: &str) -> Result<Response<Value>>;
}

#[async_trait]
impl<C: HttpClient + ?Sized> HttpClient for Arc<C> {
    async fn get(&self, url: &str) -> Result<Response<Value>> {
        (**self).get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoClient;

    #[async_trait]
    impl HttpClient for EchoClient {
        async fn get(&self, url: &str) -> Result<Response<Value>> {
            Ok(Response::ok(json!({ "url": url })))
        }
    }

    #[tokio::test]
    async fn test_arc_forwards_to_inner_client() {
        let client: Arc<dyn HttpClient> = Arc::new(EchoClient);
        let response = client.get("http://localhost/echo").await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.data["url"], "http://localhost/echo");
    }
}
