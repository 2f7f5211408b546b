//! Job domain types
//!
//! A job is one transcoding execution bound to a transform, an input asset
//! and one output asset. All state transitions happen on the remote service;
//! this side only observes them.

use serde::{Deserialize, Serialize};

/// One transcoding execution as returned by the media API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub properties: JobProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProperties {
    pub state: JobState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,
    pub input: JobInput,
    pub outputs: Vec<JobOutput>,
}

/// Remote job state
///
/// Only `Finished`, `Error` and `Canceled` are terminal; `Canceling` is an
/// in-flight state and keeps the poller going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Queued,
    Scheduled,
    Processing,
    Finished,
    Error,
    Canceling,
    Canceled,
}

impl JobState {
    /// Whether the remote service will never change this state again
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Finished | JobState::Error | JobState::Canceled)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Job input reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum JobInput {
    #[serde(rename = "#Microsoft.Media.JobInputAsset", rename_all = "camelCase")]
    Asset { asset_name: String },
}

/// Job output reference with per-output progress and error reporting
///
/// The same shape is sent when creating a job (progress/error/state absent)
/// and received when querying one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum JobOutput {
    #[serde(rename = "#Microsoft.Media.JobOutputAsset", rename_all = "camelCase")]
    Asset {
        asset_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state: Option<JobState>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<JobError>,
    },
}

impl JobOutput {
    /// Output referencing an asset, as used in job creation requests
    pub fn asset(asset_name: impl Into<String>) -> Self {
        JobOutput::Asset {
            asset_name: asset_name.into(),
            progress: None,
            state: None,
            error: None,
        }
    }

    pub fn progress(&self) -> Option<i32> {
        match self {
            JobOutput::Asset { progress, .. } => *progress,
        }
    }

    pub fn error(&self) -> Option<&JobError> {
        match self {
            JobOutput::Asset { error, .. } => error.as_ref(),
        }
    }
}

/// Error detail attached to a failed job output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl Job {
    /// Best-effort progress of the first output, 0 when absent
    pub fn progress(&self) -> i32 {
        self.properties
            .outputs
            .first()
            .and_then(JobOutput::progress)
            .unwrap_or(0)
    }

    /// Error message of the first output, if the job failed
    pub fn first_error_message(&self) -> Option<&str> {
        self.properties
            .outputs
            .first()
            .and_then(JobOutput::error)
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(JobState::Finished.is_terminal());
        assert!(JobState::Error.is_terminal());
        assert!(JobState::Canceled.is_terminal());

        assert!(!JobState::Queued.is_terminal());
        assert!(!JobState::Scheduled.is_terminal());
        assert!(!JobState::Processing.is_terminal());
        assert!(!JobState::Canceling.is_terminal());
    }

    #[test]
    fn progress_defaults_to_zero_when_absent() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "name": "job-1",
            "properties": {
                "state": "Processing",
                "input": {
                    "@odata.type": "#Microsoft.Media.JobInputAsset",
                    "assetName": "input-1"
                },
                "outputs": [{
                    "@odata.type": "#Microsoft.Media.JobOutputAsset",
                    "assetName": "output-1"
                }]
            }
        }))
        .unwrap();

        assert_eq!(job.progress(), 0);
        assert_eq!(job.first_error_message(), None);
    }

    #[test]
    fn deserializes_failed_output() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "name": "job-1",
            "properties": {
                "state": "Error",
                "input": {
                    "@odata.type": "#Microsoft.Media.JobInputAsset",
                    "assetName": "input-1"
                },
                "outputs": [{
                    "@odata.type": "#Microsoft.Media.JobOutputAsset",
                    "assetName": "output-1",
                    "progress": 40,
                    "error": { "code": "ContentMalformed", "message": "bad input" }
                }]
            }
        }))
        .unwrap();

        assert_eq!(job.properties.state, JobState::Error);
        assert_eq!(job.progress(), 40);
        assert_eq!(job.first_error_message(), Some("bad input"));
    }
}
