//! Transform domain types
//!
//! A transform is a named, reusable encoding profile. Creation is an upsert,
//! so a transform may outlive any single workflow run.

use serde::{Deserialize, Serialize};

/// A named encoding profile on the media account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transform {
    pub name: String,
    pub properties: TransformProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub outputs: Vec<TransformOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    pub on_error: OnErrorType,
    pub relative_priority: Priority,
    pub preset: Preset,
}

/// What the job should do when one transform output fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnErrorType {
    StopProcessingJob,
    ContinueJob,
}

/// Relative scheduling priority of a transform output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Normal,
    High,
}

/// Encoding preset applied by a transform output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum Preset {
    #[serde(rename = "#Microsoft.Media.StandardEncoderPreset", rename_all = "camelCase")]
    StandardEncoder {
        codecs: Vec<Codec>,
        formats: Vec<Format>,
    },
}

/// One codec in a standard encoder preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum Codec {
    #[serde(rename = "#Microsoft.Media.AacAudio", rename_all = "camelCase")]
    AacAudio {
        channels: u32,
        sampling_rate: u32,
        bitrate: u32,
        profile: AacProfile,
    },
    #[serde(rename = "#Microsoft.Media.H264Video", rename_all = "camelCase")]
    H264Video {
        /// ISO-8601 duration, e.g. "PT2S"
        key_frame_interval: String,
        layers: Vec<H264Layer>,
    },
    #[serde(rename = "#Microsoft.Media.JpgImage", rename_all = "camelCase")]
    JpgImage {
        /// Position expressions are percentages of the input duration
        start: String,
        step: String,
        range: String,
        layers: Vec<JpgLayer>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AacProfile {
    AacLc,
    HeAacV1,
    HeAacV2,
}

/// One resolution/bitrate rung of the H.264 ladder
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H264Layer {
    pub bitrate: u32,
    pub width: String,
    pub height: String,
    pub label: String,
}

/// Thumbnail layer, sized relative to the input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JpgLayer {
    pub width: String,
    pub height: String,
}

/// Output file container declared by a preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum Format {
    #[serde(rename = "#Microsoft.Media.Mp4Format", rename_all = "camelCase")]
    Mp4 { filename_pattern: String },
    #[serde(rename = "#Microsoft.Media.JpgFormat", rename_all = "camelCase")]
    Jpg { filename_pattern: String },
}
