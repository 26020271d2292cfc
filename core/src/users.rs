//! Remote-data accessor for the `/users` endpoint.
//!
//! [`Users::all`] returns a lazy future: nothing is sent until it is polled,
//! so statements written after the call run before it settles unless they
//! await it. [`Users::spawn_all`] starts the request on the tokio runtime
//! and hands back a `JoinHandle` for callers that want it in flight while
//! they continue.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    error::{FixtureError, Result},
    http::HttpClient,
    models::{Response, User},
};

/// Host the accessor targets unless told otherwise
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path of the user collection under the base URL
pub const USERS_PATH: &str = "/users";

/// Accessor for the user collection.
///
/// The HTTP capability is injected, so tests pass a fake client and the
/// calling code stays unchanged.
#[derive(Clone)]
pub struct Users {
    client: Arc<dyn HttpClient>,
    url: String,
}

impl std::fmt::Debug for Users {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Users").field("url", &self.url).finish_non_exhaustive()
    }
}

impl Users {
    /// Accessor for `http://localhost:3000/users`
    pub fn new<C: HttpClient + 'static>(client: C) -> Self {
        Self::from_arc(Arc::new(client), DEFAULT_BASE_URL)
    }

    /// Accessor for `{base_url}/users`
    pub fn with_base_url<C: HttpClient + 'static>(client: C, base_url: &str) -> Self {
        Self::from_arc(Arc::new(client), base_url)
    }

    /// Accessor sharing an existing client
    pub fn from_arc(client: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{USERS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// The URL every call goes to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every user.
    ///
    /// Issues exactly one GET per call, with no retry, timeout or caching.
    /// Transport failures, non-success statuses and bodies that are not an
    /// array of users reject the future.
    pub async fn all(&self) -> Result<Response<Vec<User>>> {
        debug!(url = %self.url, "Fetching users");

        let outcome = self.fetch().await;
        match &outcome {
            Ok(response) => info!(
                url = %self.url,
                status = response.status,
                count = response.data.len(),
                "Users fetched"
            ),
            Err(e) => warn!(url = %self.url, error = %e, "Fetching users failed"),
        }
        outcome
    }

    /// Run [`Users::all`] as a background task on the current runtime.
    ///
    /// Must be called from within a tokio runtime. A panic inside the task
    /// surfaces as a transport error when the handle is awaited through
    /// [`Users::join`].
    pub fn spawn_all(&self) -> JoinHandle<Result<Response<Vec<User>>>> {
        let users = self.clone();
        tokio::spawn(async move { users.all().await })
    }

    /// Await a handle returned by [`Users::spawn_all`]
    pub async fn join(
        handle: JoinHandle<Result<Response<Vec<User>>>>,
    ) -> Result<Response<Vec<User>>> {
        handle.await.map_err(FixtureError::transport)?
    }

    async fn fetch(&self) -> Result<Response<Vec<User>>> {
        let raw = self.client.get(&self.url).await?.error_for_status()?;
        raw.decode()
    }
}
