//! Vodkit Media Client
//!
//! A type-safe HTTP client for the remote media-processing API used by the
//! VOD workflow: assets, transforms, jobs, streaming locators and endpoints,
//! plus the direct blob upload channel for source media.
//!
//! The client authenticates with either a bearer token obtained through a
//! directory client-credential exchange or a static API key; both are built
//! through [`auth::AccountBinding`]. Consumers that only need the workflow
//! operations should depend on the [`ops::MediaOps`] trait rather than the
//! concrete client, which keeps them testable against an in-memory fake.
//!
//! # Example
//!
//! ```no_run
//! use vodkit_client::{MediaClient, MediaScope};
//!
//! #[tokio::main]
//! async fn main() -> vodkit_client::Result<()> {
//!     let client = MediaClient::with_api_key(
//!         "https://api.media.example.com",
//!         "00000000-0000-0000-0000-000000000000",
//!         "secret-key",
//!     );
//!     let scope = MediaScope::new("my-group", "my-account");
//!
//!     let asset = client.upsert_asset(&scope, "input-demo").await?;
//!     println!("created asset {}", asset.name);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod ops;

mod assets;
mod blob;
mod jobs;
mod streaming;
mod transforms;

// Re-export commonly used types
pub use auth::{AadOptions, AccountBinding, RmsOptions};
pub use error::{ClientError, Result};
pub use ops::MediaOps;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// API version sent with every management request
const API_VERSION: &str = "2023-01-01";

/// Addressing for one media account: resource group plus account name
///
/// The API scopes every resource beneath a resource group and account, so the
/// pair travels with each call rather than being baked into the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaScope {
    pub resource_group: String,
    pub account_name: String,
}

impl MediaScope {
    pub fn new(resource_group: impl Into<String>, account_name: impl Into<String>) -> Self {
        Self {
            resource_group: resource_group.into(),
            account_name: account_name.into(),
        }
    }
}

/// Credential attached to every management request
#[derive(Debug, Clone)]
enum AuthToken {
    /// Bearer token from the directory client-credential exchange
    Bearer(String),
    /// Static API key sent as a request header
    ApiKey(String),
}

/// HTTP client for the media-processing management API
///
/// Bound to one API endpoint and one subscription for its whole lifetime;
/// the workflow holds a single instance per run.
#[derive(Debug, Clone)]
pub struct MediaClient {
    /// Base URL of the management API (e.g. "https://api.media.example.com")
    base_url: String,
    /// Subscription the account lives under
    subscription_id: String,
    auth: AuthToken,
    /// HTTP client instance
    client: Client,
}

impl MediaClient {
    /// Create a client authenticated with a bearer token
    pub fn with_bearer_token(
        base_url: impl Into<String>,
        subscription_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::build(base_url, subscription_id, AuthToken::Bearer(token.into()))
    }

    /// Create a client authenticated with a static API key
    ///
    /// Construction is local; no network call is made.
    pub fn with_api_key(
        base_url: impl Into<String>,
        subscription_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::build(base_url, subscription_id, AuthToken::ApiKey(api_key.into()))
    }

    fn build(
        base_url: impl Into<String>,
        subscription_id: impl Into<String>,
        auth: AuthToken,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            subscription_id: subscription_id.into(),
            auth,
            client: Client::new(),
        }
    }

    /// Get the base URL of the management API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the subscription this client is bound to
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Build the URL of a resource under the account scope
    pub(crate) fn account_url(&self, scope: &MediaScope, resource: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Media/mediaServices/{}/{}?api-version={}",
            self.base_url,
            self.subscription_id,
            scope.resource_group,
            scope.account_name,
            resource,
            API_VERSION,
        )
    }

    /// Attach the credential to a request
    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthToken::Bearer(token) => request.bearer_auth(token),
            AuthToken::ApiKey(key) => request.header("x-api-key", key),
        }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no useful body (e.g. start calls)
    ///
    /// This method checks the status code and returns an error if the request failed.
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MediaClient::with_api_key("https://api.media.example.com", "sub-1", "key");
        assert_eq!(client.base_url(), "https://api.media.example.com");
        assert_eq!(client.subscription_id(), "sub-1");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = MediaClient::with_bearer_token("https://api.media.example.com/", "sub-1", "t");
        assert_eq!(client.base_url(), "https://api.media.example.com");
    }

    #[test]
    fn test_account_url_shape() {
        let client = MediaClient::with_api_key("https://api.media.example.com", "sub-1", "key");
        let scope = MediaScope::new("group-a", "account-b");

        let url = client.account_url(&scope, "assets/input-123");
        assert_eq!(
            url,
            format!(
                "https://api.media.example.com/subscriptions/sub-1/resourceGroups/group-a\
                 /providers/Microsoft.Media/mediaServices/account-b/assets/input-123\
                 ?api-version={API_VERSION}"
            )
        );
    }
}
