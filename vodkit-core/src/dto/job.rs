//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobInput, JobOutput};

/// Body of a job creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub properties: NewJob,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub input: JobInput,
    pub outputs: Vec<JobOutput>,
}

impl CreateJobRequest {
    /// Job reading one input asset and writing one output asset
    pub fn asset_to_asset(input_asset: impl Into<String>, output_asset: impl Into<String>) -> Self {
        Self {
            properties: NewJob {
                input: JobInput::Asset {
                    asset_name: input_asset.into(),
                },
                outputs: vec![JobOutput::asset(output_asset)],
            },
        }
    }
}
