//! Standard VOD encoding profile
//!
//! The fixed three-codec profile applied to every encoding job: stereo AAC,
//! a three-rung H.264 ladder and periodic JPG thumbnails. This is constant
//! configuration; it is never derived per run.

use crate::domain::transform::{
    AacProfile, Codec, Format, H264Layer, JpgLayer, OnErrorType, Preset, Priority,
    TransformOutput, TransformProperties,
};

/// MP4 output naming, one file per ladder rung
pub const MP4_FILENAME_PATTERN: &str = "Video-{Basename}-{Label}-{Bitrate}{Extension}";

/// Thumbnail output naming
pub const JPG_FILENAME_PATTERN: &str = "Thumbnail-{Basename}-{Index}{Extension}";

const DESCRIPTION: &str = "A simple custom encoding transform with 3 MP4 bitrates";

/// The standard multi-bitrate encoding transform
///
/// A single output at normal priority that stops the whole job on any
/// transcode error.
pub fn standard_encoding_transform() -> TransformProperties {
    TransformProperties {
        description: Some(DESCRIPTION.to_string()),
        outputs: vec![TransformOutput {
            on_error: OnErrorType::StopProcessingJob,
            relative_priority: Priority::Normal,
            preset: Preset::StandardEncoder {
                codecs: standard_codecs(),
                formats: standard_formats(),
            },
        }],
    }
}

fn standard_codecs() -> Vec<Codec> {
    vec![
        Codec::AacAudio {
            channels: 2,
            sampling_rate: 48_000,
            bitrate: 128_000,
            profile: AacProfile::AacLc,
        },
        Codec::H264Video {
            key_frame_interval: "PT2S".to_string(),
            layers: vec![
                h264_layer(3_600_000, "1280", "720", "HD-3600kbps"),
                h264_layer(1_600_000, "960", "540", "SD-1600kbps"),
                h264_layer(600_000, "640", "360", "SD-600kbps"),
            ],
        },
        // Thumbnails sampled across 25%..80% of the input in 25% steps
        Codec::JpgImage {
            start: "25%".to_string(),
            step: "25%".to_string(),
            range: "80%".to_string(),
            layers: vec![JpgLayer {
                width: "50%".to_string(),
                height: "50%".to_string(),
            }],
        },
    ]
}

fn standard_formats() -> Vec<Format> {
    vec![
        Format::Mp4 {
            filename_pattern: MP4_FILENAME_PATTERN.to_string(),
        },
        Format::Jpg {
            filename_pattern: JPG_FILENAME_PATTERN.to_string(),
        },
    ]
}

fn h264_layer(bitrate: u32, width: &str, height: &str, label: &str) -> H264Layer {
    H264Layer {
        bitrate,
        width: width.to_string(),
        height: height.to_string(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_has_single_stop_on_error_output() {
        let profile = standard_encoding_transform();

        assert_eq!(profile.outputs.len(), 1);
        let output = &profile.outputs[0];
        assert_eq!(output.on_error, OnErrorType::StopProcessingJob);
        assert_eq!(output.relative_priority, Priority::Normal);
    }

    #[test]
    fn profile_declares_three_codecs_and_two_formats() {
        let profile = standard_encoding_transform();
        let Preset::StandardEncoder { codecs, formats } = &profile.outputs[0].preset;

        assert_eq!(codecs.len(), 3);
        assert_eq!(formats.len(), 2);

        let Codec::H264Video { layers, .. } = &codecs[1] else {
            panic!("expected H.264 codec in second position");
        };
        let bitrates: Vec<u32> = layers.iter().map(|l| l.bitrate).collect();
        assert_eq!(bitrates, vec![3_600_000, 1_600_000, 600_000]);
    }

    #[test]
    fn profile_serializes_with_odata_tags() {
        let body = serde_json::to_value(standard_encoding_transform()).unwrap();

        assert_eq!(
            body["outputs"][0]["preset"]["@odata.type"],
            "#Microsoft.Media.StandardEncoderPreset"
        );
        assert_eq!(
            body["outputs"][0]["preset"]["codecs"][0]["@odata.type"],
            "#Microsoft.Media.AacAudio"
        );
        assert_eq!(
            body["outputs"][0]["preset"]["codecs"][0]["samplingRate"],
            48_000
        );
        assert_eq!(
            body["outputs"][0]["preset"]["formats"][0]["filenamePattern"],
            MP4_FILENAME_PATTERN
        );
    }
}
