//! Mock implementation of the HttpClient trait
//!
//! Provides a thread-safe stand-in for the network with:
//! - Canned responses per URL, or one fallback for every URL
//! - Error injection for the reject path
//! - Call tracking for verification
//! - A response gate to observe requests while they are pending

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use fixture_core::{FixtureError, HttpClient, Response, Result, User};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::Notify;
use tracing::debug;

/// Mock implementation of HttpClient for testing
///
/// Clones share state, so a test can keep one handle for verification
/// while the accessor under test owns another. Nothing is process-wide:
/// each test builds its own mock and nothing leaks between tests.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<HashMap<String, Response<Value>>>>,
    fallback: Arc<Mutex<Option<Response<Value>>>>,
    error_injection: Arc<Mutex<Option<FixtureError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
    gate: Arc<ResponseGate>,
}

impl MockHttpClient {
    /// Create a mock with no responses configured.
    ///
    /// Unconfigured URLs answer with status 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock answering every URL with `users` and status 200
    pub fn with_users(users: Vec<User>) -> Self {
        let mock = Self::new();
        mock.respond_with_users(users);
        mock
    }

    /// Create a mock answering every URL with `response`
    pub fn with_response(response: Response<Value>) -> Self {
        let mock = Self::new();
        *mock.fallback.lock() = Some(response);
        mock
    }

    /// Answer every URL without a dedicated route with `users`
    pub fn respond_with_users(&self, users: Vec<User>) {
        *self.fallback.lock() = Some(Response::ok(json!(users)));
    }

    /// Answer a specific URL with `response`
    pub fn respond_to(&self, url: impl Into<String>, response: Response<Value>) {
        self.routes.lock().insert(url.into(), response);
    }

    /// Inject error for next call
    pub fn inject_error(&self, error: FixtureError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Hold every response until the returned gate is released.
    ///
    /// Calls made while held stay pending; they are recorded in the call
    /// history as soon as they start.
    pub fn hold_responses(&self) -> Arc<ResponseGate> {
        self.gate.hold();
        self.gate.clone()
    }

    /// Get history of calls, formatted as `get(<url>)`
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.call_history.lock().len()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Forget responses, injected errors and history; release any held calls
    pub fn reset(&self) {
        self.routes.lock().clear();
        *self.fallback.lock() = None;
        self.clear_error();
        self.clear_history();
        self.gate.release();
    }

    /// Assert a URL containing `fragment` was requested
    pub fn assert_called(&self, fragment: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(fragment)),
            "No request matching '{}' was made. Call history: {:?}",
            fragment,
            *history
        );
    }

    /// Assert exactly `expected` calls were made
    pub fn assert_called_times(&self, expected: usize) {
        let history = self.call_history.lock();
        assert_eq!(
            history.len(),
            expected,
            "Expected {} request(s), got {}. Call history: {:?}",
            expected,
            history.len(),
            *history
        );
    }

    /// Assert no request was made at all
    pub fn assert_not_called(&self) {
        self.assert_called_times(0);
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        let mut error_opt = self.error_injection.lock();
        if let Some(error) = error_opt.take() {
            return Err(error);
        }
        Ok(())
    }

    /// Record method call with parameters in history
    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }

    fn lookup(&self, url: &str) -> Option<Response<Value>> {
        if let Some(response) = self.routes.lock().get(url) {
            return Some(response.clone());
        }
        self.fallback.lock().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response<Value>> {
        self.record_call_with_params("get", url);

        self.gate.wait().await;

        // Check for error injection
        self.check_error_injection()?;

        match self.lookup(url) {
            Some(response) => {
                debug!(url, status = response.status, "Mock response served");
                Ok(response)
            }
            None => {
                debug!(url, "No mock response configured");
                Ok(Response::with_status(404, Value::Null))
            }
        }
    }
}

/// Gate holding mock responses until released
#[derive(Debug, Default)]
pub struct ResponseGate {
    held: AtomicBool,
    notify: Notify,
}

impl ResponseGate {
    /// Let every pending and future call complete
    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// True while calls are being held
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    async fn wait(&self) {
        loop {
            // Register before checking so a concurrent release is not missed
            let notified = self.notify.notified();
            if !self.is_held() {
                return;
            }
            notified.await;
        }
    }
}
