//! Asset DTOs

use serde::{Deserialize, Serialize};

use crate::domain::asset::AssetProperties;

/// Body of an asset upsert; all properties are server-assigned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertAssetRequest {
    pub properties: AssetProperties,
}

/// Access level requested for an asset's backing container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetContainerPermission {
    Read,
    ReadWrite,
    ReadWriteDelete,
}

/// Request for short-lived, scoped container access URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerSasRequest {
    pub permissions: AssetContainerPermission,
    pub expiry_time: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerSasResponse {
    pub asset_container_sas_urls: Vec<String>,
}
