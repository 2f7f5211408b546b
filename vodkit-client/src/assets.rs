//! Asset API endpoints

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::{MediaClient, MediaScope};
use vodkit_core::domain::asset::Asset;
use vodkit_core::dto::asset::{
    AssetContainerPermission, ListContainerSasRequest, ListContainerSasResponse,
};

impl MediaClient {
    /// Create or update an asset
    ///
    /// Assets are created empty; upserting an existing name is safe and
    /// returns the existing asset.
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `asset_name` - Name of the asset to create
    ///
    /// # Returns
    /// The created or existing asset
    pub async fn upsert_asset(&self, scope: &MediaScope, asset_name: &str) -> Result<Asset> {
        let url = self.account_url(scope, &format!("assets/{}", asset_name));
        debug!(asset_name, "upserting asset");

        let body = serde_json::json!({ "properties": {} });
        let response = self.authorize(self.http().put(&url)).json(&body).send().await?;

        self.handle_response(response).await
    }

    /// List short-lived, scoped access URLs for an asset's backing container
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `asset_name` - Asset whose container to open
    /// * `permissions` - Access level encoded into the returned URLs
    /// * `expiry_time` - When the returned URLs stop working
    ///
    /// # Returns
    /// One or more container SAS URLs; any of them can be used for upload
    pub async fn list_asset_container_sas(
        &self,
        scope: &MediaScope,
        asset_name: &str,
        permissions: AssetContainerPermission,
        expiry_time: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        let url = self.account_url(scope, &format!("assets/{}/listContainerSas", asset_name));
        debug!(asset_name, "listing container SAS URLs");

        let request = ListContainerSasRequest {
            permissions,
            expiry_time,
        };
        let response = self
            .authorize(self.http().post(&url))
            .json(&request)
            .send()
            .await?;

        let sas: ListContainerSasResponse = self.handle_response(response).await?;
        Ok(sas.asset_container_sas_urls)
    }
}
