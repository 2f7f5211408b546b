//! Streaming domain types
//!
//! A streaming locator publishes an asset under a streaming policy; a
//! streaming endpoint is the host that serves the locator's paths.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published mapping from an asset to servable path templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamingLocator {
    pub name: String,
    pub properties: StreamingLocatorProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingLocatorProperties {
    pub asset_name: String,
    pub streaming_policy_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming_locator_id: Option<Uuid>,
}

/// Network-facing host serving locator paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamingEndpoint {
    pub name: String,
    pub properties: StreamingEndpointProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingEndpointProperties {
    pub resource_state: StreamingEndpointResourceState,
    pub host_name: String,
}

/// Operational state of a streaming endpoint
///
/// Only `Running` serves traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamingEndpointResourceState {
    Stopped,
    Starting,
    Running,
    Stopping,
    Scaling,
    Deleting,
}

impl StreamingEndpoint {
    pub fn is_running(&self) -> bool {
        self.properties.resource_state == StreamingEndpointResourceState::Running
    }
}
