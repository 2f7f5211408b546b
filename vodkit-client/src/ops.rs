//! Workflow-facing capability trait
//!
//! The VOD workflow only needs a narrow slice of the media API. Depending on
//! this trait instead of [`MediaClient`] keeps the driver and poller testable
//! against an in-memory fake.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{MediaClient, MediaScope};
use crate::error::Result;
use vodkit_core::domain::asset::Asset;
use vodkit_core::domain::job::Job;
use vodkit_core::domain::streaming::{StreamingEndpoint, StreamingLocator};
use vodkit_core::domain::transform::{Transform, TransformProperties};
use vodkit_core::dto::asset::AssetContainerPermission;
use vodkit_core::dto::job::CreateJobRequest;
use vodkit_core::dto::streaming::ListPathsResponse;

/// The media API operations the VOD workflow depends on
#[async_trait]
pub trait MediaOps: Send + Sync {
    /// Create or return an asset; safe to call on an existing name
    async fn upsert_asset(&self, scope: &MediaScope, asset_name: &str) -> Result<Asset>;

    /// Obtain short-lived container access URLs for an asset
    async fn list_asset_container_sas(
        &self,
        scope: &MediaScope,
        asset_name: &str,
        permissions: AssetContainerPermission,
        expiry_time: DateTime<Utc>,
    ) -> Result<Vec<String>>;

    /// Upload a local file into a container addressed by a SAS URL
    async fn upload_file(&self, container_sas_url: &str, path: &Path) -> Result<()>;

    /// Create or update a named encoding transform
    async fn upsert_transform(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        properties: TransformProperties,
    ) -> Result<Transform>;

    /// Submit an encoding job under a transform
    async fn create_job(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
        request: CreateJobRequest,
    ) -> Result<Job>;

    /// Query the current state of a job
    async fn get_job(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
    ) -> Result<Job>;

    /// Publish an asset under a streaming policy
    async fn create_streaming_locator(
        &self,
        scope: &MediaScope,
        locator_name: &str,
        asset_name: &str,
        streaming_policy_name: &str,
    ) -> Result<StreamingLocator>;

    /// Get a streaming endpoint and its operational state
    async fn get_streaming_endpoint(
        &self,
        scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<StreamingEndpoint>;

    /// Ask the service to start a streaming endpoint (fire-and-forget)
    async fn start_streaming_endpoint(
        &self,
        scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<()>;

    /// List streaming and download path templates for a locator
    async fn list_streaming_paths(
        &self,
        scope: &MediaScope,
        locator_name: &str,
    ) -> Result<ListPathsResponse>;
}

#[async_trait]
impl MediaOps for MediaClient {
    async fn upsert_asset(&self, scope: &MediaScope, asset_name: &str) -> Result<Asset> {
        MediaClient::upsert_asset(self, scope, asset_name).await
    }

    async fn list_asset_container_sas(
        &self,
        scope: &MediaScope,
        asset_name: &str,
        permissions: AssetContainerPermission,
        expiry_time: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        MediaClient::list_asset_container_sas(self, scope, asset_name, permissions, expiry_time)
            .await
    }

    async fn upload_file(&self, container_sas_url: &str, path: &Path) -> Result<()> {
        MediaClient::upload_file(self, container_sas_url, path).await
    }

    async fn upsert_transform(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        properties: TransformProperties,
    ) -> Result<Transform> {
        MediaClient::upsert_transform(self, scope, transform_name, properties).await
    }

    async fn create_job(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
        request: CreateJobRequest,
    ) -> Result<Job> {
        MediaClient::create_job(self, scope, transform_name, job_name, request).await
    }

    async fn get_job(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
    ) -> Result<Job> {
        MediaClient::get_job(self, scope, transform_name, job_name).await
    }

    async fn create_streaming_locator(
        &self,
        scope: &MediaScope,
        locator_name: &str,
        asset_name: &str,
        streaming_policy_name: &str,
    ) -> Result<StreamingLocator> {
        MediaClient::create_streaming_locator(
            self,
            scope,
            locator_name,
            asset_name,
            streaming_policy_name,
        )
        .await
    }

    async fn get_streaming_endpoint(
        &self,
        scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<StreamingEndpoint> {
        MediaClient::get_streaming_endpoint(self, scope, endpoint_name).await
    }

    async fn start_streaming_endpoint(
        &self,
        scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<()> {
        MediaClient::start_streaming_endpoint(self, scope, endpoint_name).await
    }

    async fn list_streaming_paths(
        &self,
        scope: &MediaScope,
        locator_name: &str,
    ) -> Result<ListPathsResponse> {
        MediaClient::list_streaming_paths(self, scope, locator_name).await
    }
}
