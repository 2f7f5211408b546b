//! In-memory media API fake shared by the poller and workflow tests
//!
//! Records every operation in call order and plays back a scripted sequence
//! of job states, so tests can assert exactly which remote calls a run makes.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vodkit_client::error::Result;
use vodkit_client::{MediaOps, MediaScope};
use vodkit_core::domain::asset::{Asset, AssetProperties};
use vodkit_core::domain::job::{Job, JobError, JobInput, JobOutput, JobProperties, JobState};
use vodkit_core::domain::streaming::{
    StreamingEndpoint, StreamingEndpointProperties, StreamingEndpointResourceState,
    StreamingLocator, StreamingLocatorProperties,
};
use vodkit_core::domain::transform::{Transform, TransformProperties};
use vodkit_core::dto::asset::AssetContainerPermission;
use vodkit_core::dto::job::CreateJobRequest;
use vodkit_core::dto::streaming::{ListPathsResponse, StreamingPath};

pub struct RecordingOps {
    calls: Mutex<Vec<String>>,
    job_states: Mutex<VecDeque<Job>>,
    endpoint_state: StreamingEndpointResourceState,
    host_name: String,
    paths: ListPathsResponse,
}

impl RecordingOps {
    pub fn new(job_states: Vec<Job>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            job_states: Mutex::new(job_states.into()),
            endpoint_state: StreamingEndpointResourceState::Running,
            host_name: "stream.example.com".to_string(),
            paths: ListPathsResponse::default(),
        }
    }

    pub fn with_endpoint_state(mut self, state: StreamingEndpointResourceState) -> Self {
        self.endpoint_state = state;
        self
    }

    pub fn with_paths(mut self, paths: ListPathsResponse) -> Self {
        self.paths = paths;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls whose label starts with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, label: String) {
        self.calls.lock().unwrap().push(label);
    }
}

#[async_trait]
impl MediaOps for RecordingOps {
    async fn upsert_asset(&self, _scope: &MediaScope, asset_name: &str) -> Result<Asset> {
        self.record(format!("upsert_asset:{asset_name}"));
        Ok(Asset {
            name: asset_name.to_string(),
            properties: AssetProperties::default(),
        })
    }

    async fn list_asset_container_sas(
        &self,
        _scope: &MediaScope,
        asset_name: &str,
        _permissions: AssetContainerPermission,
        _expiry_time: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        self.record(format!("list_container_sas:{asset_name}"));
        Ok(vec![
            "https://store.example.com/container-1?sig=abc".to_string(),
        ])
    }

    async fn upload_file(&self, _container_sas_url: &str, path: &Path) -> Result<()> {
        self.record(format!("upload_file:{}", path.display()));
        Ok(())
    }

    async fn upsert_transform(
        &self,
        _scope: &MediaScope,
        transform_name: &str,
        properties: TransformProperties,
    ) -> Result<Transform> {
        self.record(format!("upsert_transform:{transform_name}"));
        Ok(Transform {
            name: transform_name.to_string(),
            properties,
        })
    }

    async fn create_job(
        &self,
        _scope: &MediaScope,
        _transform_name: &str,
        job_name: &str,
        request: CreateJobRequest,
    ) -> Result<Job> {
        self.record(format!("create_job:{job_name}"));
        Ok(Job {
            name: job_name.to_string(),
            properties: JobProperties {
                state: JobState::Queued,
                created: None,
                input: request.properties.input,
                outputs: request.properties.outputs,
            },
        })
    }

    async fn get_job(
        &self,
        _scope: &MediaScope,
        _transform_name: &str,
        job_name: &str,
    ) -> Result<Job> {
        self.record(format!("get_job:{job_name}"));
        // Scripted states are authored without knowing the generated job name
        let mut job = self
            .job_states
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted state left for job {job_name}"));
        job.name = job_name.to_string();
        Ok(job)
    }

    async fn create_streaming_locator(
        &self,
        _scope: &MediaScope,
        locator_name: &str,
        asset_name: &str,
        streaming_policy_name: &str,
    ) -> Result<StreamingLocator> {
        self.record(format!("create_locator:{locator_name}"));
        Ok(StreamingLocator {
            name: locator_name.to_string(),
            properties: StreamingLocatorProperties {
                asset_name: asset_name.to_string(),
                streaming_policy_name: streaming_policy_name.to_string(),
                streaming_locator_id: None,
            },
        })
    }

    async fn get_streaming_endpoint(
        &self,
        _scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<StreamingEndpoint> {
        self.record(format!("get_endpoint:{endpoint_name}"));
        Ok(StreamingEndpoint {
            name: endpoint_name.to_string(),
            properties: StreamingEndpointProperties {
                resource_state: self.endpoint_state,
                host_name: self.host_name.clone(),
            },
        })
    }

    async fn start_streaming_endpoint(
        &self,
        _scope: &MediaScope,
        endpoint_name: &str,
    ) -> Result<()> {
        self.record(format!("start_endpoint:{endpoint_name}"));
        Ok(())
    }

    async fn list_streaming_paths(
        &self,
        _scope: &MediaScope,
        locator_name: &str,
    ) -> Result<ListPathsResponse> {
        self.record(format!("list_paths:{locator_name}"));
        Ok(self.paths.clone())
    }
}

pub fn job_in_state(state: JobState, progress: Option<i32>) -> Job {
    Job {
        name: "job-scripted".to_string(),
        properties: JobProperties {
            state,
            created: None,
            input: JobInput::Asset {
                asset_name: "input-scripted".to_string(),
            },
            outputs: vec![JobOutput::Asset {
                asset_name: "output-scripted".to_string(),
                progress,
                state: Some(state),
                error: None,
            }],
        },
    }
}

pub fn failed_job(message: &str) -> Job {
    let mut job = job_in_state(JobState::Error, Some(0));
    job.properties.outputs = vec![JobOutput::Asset {
        asset_name: "output-scripted".to_string(),
        progress: Some(0),
        state: Some(JobState::Error),
        error: Some(JobError {
            code: Some("ContentMalformed".to_string()),
            message: message.to_string(),
        }),
    }];
    job
}

pub fn sample_paths() -> ListPathsResponse {
    ListPathsResponse {
        streaming_paths: vec![
            StreamingPath {
                streaming_protocol: "Hls".to_string(),
                encryption_scheme: Some("NoEncryption".to_string()),
                paths: vec![
                    "/locator-1/movie.ism/manifest(format=m3u8-aapl)".to_string(),
                    "/locator-1/movie.ism/manifest(format=m3u8-cmaf)".to_string(),
                ],
            },
            StreamingPath {
                streaming_protocol: "Dash".to_string(),
                encryption_scheme: Some("NoEncryption".to_string()),
                paths: vec!["/locator-1/movie.ism/manifest(format=mpd-time-cmaf)".to_string()],
            },
        ],
        download_paths: vec![
            "/locator-1/Video-movie-HD-3600kbps-3600000.mp4".to_string(),
            "/locator-1/Thumbnail-movie-000001.jpg".to_string(),
        ],
    }
}
