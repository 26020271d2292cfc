use anyhow::{Context, Result};
use fixture_core::Users;
use tracing::info;
use transport::ReqwestHttpClient;

use crate::config::Config;

/// Create the HTTP client used for real requests
pub fn create_http_client() -> Result<ReqwestHttpClient> {
    let inner = reqwest_client()?;
    Ok(ReqwestHttpClient::with_client(inner))
}

/// Create the users accessor for the configured endpoint
///
/// No request is sent here; the first one goes out when `all()` is awaited.
pub fn create_users(config: &Config) -> Result<Users> {
    let client = create_http_client().context("Failed to create HTTP client")?;
    let users = Users::with_base_url(client, &config.endpoint.base_url);
    info!(url = users.url(), "Users accessor ready");
    Ok(users)
}

fn reqwest_client() -> Result<transport::reqwest::Client> {
    transport::reqwest::Client::builder()
        .user_agent(concat!("fixtures/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build reqwest client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_users_uses_configured_base_url() {
        let mut config = Config::default();
        config.endpoint.base_url = "http://127.0.0.1:4010".to_string();

        let users = create_users(&config).unwrap();
        assert_eq!(users.url(), "http://127.0.0.1:4010/users");
    }
}
