//! Account bindings and credential flows
//!
//! The workflow can run against two account flavors: a directory-authenticated
//! account (client-credential token exchange) and an API-key-authenticated
//! account. Both are modeled as variants of [`AccountBinding`] so the rest of
//! the workflow never branches on the flavor.

use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{MediaClient, MediaScope};

/// Directory login endpoint used for the client-credential exchange
const DIRECTORY_LOGIN_BASE: &str = "https://login.microsoftonline.com";

/// Resource audience requested for management-plane tokens
const MANAGEMENT_RESOURCE: &str = "https://management.core.windows.net/";

/// Configuration for the directory-authenticated account
#[derive(Debug, Clone)]
pub struct AadOptions {
    pub api_endpoint: String,
    pub subscription_id: String,
    pub resource_group: String,
    pub account_name: String,
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Configuration for the API-key-authenticated account
#[derive(Debug, Clone)]
pub struct RmsOptions {
    pub api_endpoint: String,
    pub subscription_id: String,
    pub resource_group: String,
    pub account_name: String,
    pub api_key: String,
}

/// One account configuration selected for a workflow run
///
/// Each variant carries its own endpoint and subscription; nothing is shared
/// across variants. Immutable once constructed.
#[derive(Debug, Clone)]
pub enum AccountBinding {
    /// Directory-authenticated account; `connect` performs a sign-in exchange
    Aad(AadOptions),
    /// API-key account; `connect` is local and immediate
    ApiKey(RmsOptions),
}

impl AccountBinding {
    pub fn api_endpoint(&self) -> &str {
        match self {
            AccountBinding::Aad(o) => &o.api_endpoint,
            AccountBinding::ApiKey(o) => &o.api_endpoint,
        }
    }

    pub fn subscription_id(&self) -> &str {
        match self {
            AccountBinding::Aad(o) => &o.subscription_id,
            AccountBinding::ApiKey(o) => &o.subscription_id,
        }
    }

    /// Resource group + account this binding addresses
    pub fn scope(&self) -> MediaScope {
        match self {
            AccountBinding::Aad(o) => MediaScope::new(&o.resource_group, &o.account_name),
            AccountBinding::ApiKey(o) => MediaScope::new(&o.resource_group, &o.account_name),
        }
    }

    /// Whether the account accepts transform upserts
    ///
    /// The API-key service does not support transform writes; it relies on a
    /// pre-provisioned transform of the expected name.
    pub fn supports_transform_writes(&self) -> bool {
        matches!(self, AccountBinding::Aad(_))
    }

    /// Build an authenticated client for this binding
    ///
    /// For the directory variant this performs the blocking sign-in exchange
    /// before returning; for the API-key variant no network call is made.
    pub async fn connect(&self) -> Result<MediaClient> {
        match self {
            AccountBinding::Aad(options) => {
                let token = request_directory_token(options).await?;
                Ok(MediaClient::with_bearer_token(
                    &options.api_endpoint,
                    &options.subscription_id,
                    token,
                ))
            }
            AccountBinding::ApiKey(options) => Ok(MediaClient::with_api_key(
                &options.api_endpoint,
                &options.subscription_id,
                &options.api_key,
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client-credential token exchange against the directory service
async fn request_directory_token(options: &AadOptions) -> Result<String> {
    let url = format!("{}/{}/oauth2/token", DIRECTORY_LOGIN_BASE, options.tenant_id);
    debug!(tenant_id = %options.tenant_id, "requesting directory token");

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", options.client_id.as_str()),
        ("client_secret", options.client_secret.as_str()),
        ("resource", MANAGEMENT_RESOURCE),
    ];

    let response = reqwest::Client::new().post(&url).form(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::TokenExchange(format!(
            "status {}: {}",
            status.as_u16(),
            error_text
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| ClientError::TokenExchange(format!("malformed token response: {}", e)))?;

    Ok(token.access_token)
}
