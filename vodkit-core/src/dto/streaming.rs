//! Streaming DTOs

use serde::{Deserialize, Serialize};

/// Body of a streaming locator creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStreamingLocatorRequest {
    pub properties: NewStreamingLocator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStreamingLocator {
    pub asset_name: String,
    pub streaming_policy_name: String,
}

/// Path templates served for one locator
///
/// Streaming paths are grouped by protocol; download paths are flat. Both are
/// host-relative and must be prefixed with the streaming endpoint host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPathsResponse {
    #[serde(default)]
    pub streaming_paths: Vec<StreamingPath>,
    #[serde(default)]
    pub download_paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingPath {
    pub streaming_protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_scheme: Option<String>,
    #[serde(default)]
    pub paths: Vec<String>,
}
