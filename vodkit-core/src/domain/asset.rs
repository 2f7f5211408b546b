//! Asset domain types
//!
//! An asset is a named remote storage container holding either the uploaded
//! source media or the encoded job output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named storage container on the media account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub properties: AssetProperties,
}

/// Asset properties, all server-assigned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<Uuid>,
    /// Backing blob container name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_name: Option<String>,
}
