//! Streaming locator and endpoint API endpoints

use tracing::debug;

use crate::error::Result;
use crate::{MediaClient, MediaScope};
use vodkit_core::domain::streaming::{StreamingEndpoint, StreamingLocator};
use vodkit_core::dto::streaming::{
    CreateStreamingLocatorRequest, ListPathsResponse, NewStreamingLocator,
};

impl MediaClient {
    /// Publish an asset under a streaming policy
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `locator_name` - Name of the locator to create
    /// * `asset_name` - Asset to publish
    /// * `streaming_policy_name` - Policy governing delivery
    ///
    /// # Returns
    /// The created locator
    pub async fn create_streaming_locator(
        &self,
        scope: &MediaScope,
        locator_name: &str,
        asset_name: &str,
        streaming_policy_name: &str,
    ) -> Result<StreamingLocator> {
        let url = self.account_url(scope, &format!("streamingLocators/{}", locator_name));
        debug!(locator_name, asset_name, "creating streaming locator");

        let request = CreateStreamingLocatorRequest {
            properties: NewStreamingLocator {
                asset_name: asset_name.to_string(),
                streaming_policy_name: streaming_policy_name.to_string(),
            },
        };
        let response = self
            .authorize(self.http().put(&url))
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a streaming endpoint and its operational state
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `endpoint_name` - Name of the endpoint
    ///
    /// # Returns
    /// The endpoint, including its host name and resource state
    pub async fn get_streaming_endpoint(
        &self,
        scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<StreamingEndpoint> {
        let url = self.account_url(scope, &format!("streamingEndpoints/{}", endpoint_name));
        let response = self.authorize(self.http().get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Ask the service to start a streaming endpoint
    ///
    /// Returns as soon as the request is accepted; the endpoint keeps
    /// starting in the background.
    pub async fn start_streaming_endpoint(
        &self,
        scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<()> {
        let url = self.account_url(scope, &format!("streamingEndpoints/{}/start", endpoint_name));
        debug!(endpoint_name, "starting streaming endpoint");

        let response = self.authorize(self.http().post(&url)).send().await?;

        self.handle_empty_response(response).await
    }

    /// List the streaming and download path templates for a locator
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `locator_name` - The locator to list paths for
    ///
    /// # Returns
    /// Host-relative streaming and download paths, in API order
    pub async fn list_streaming_paths(
        &self,
        scope: &MediaScope,
        locator_name: &str,
    ) -> Result<ListPathsResponse> {
        let url = self.account_url(scope, &format!("streamingLocators/{}/listPaths", locator_name));
        let response = self.authorize(self.http().post(&url)).send().await?;

        self.handle_response(response).await
    }
}
