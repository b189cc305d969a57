//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; these are the documents it prints.

use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures.
///
/// Parameter and bank errors pass their own codes (`E001`...) through.
pub mod error_codes {
    /// Invalid combination of options
    pub const INVALID_ARGS: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// File could not be read
    pub const FILE_READ: &str = "CLI_003";
    /// Input is not a PCM WAV container
    pub const INVALID_CONTAINER: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Builds an error from an `anyhow` chain, preferring a code carried by
    /// the chain over `fallback`.
    pub fn from_anyhow(err: &anyhow::Error, fallback: &str) -> Self {
        let code = crate::input::error_code(err).unwrap_or(fallback);
        Self::new(code, format!("{:#}", err))
    }
}

/// Summary of one rendered sound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundSummary {
    /// Where the parameters came from.
    pub source: String,
    /// Waveform name.
    pub wave_type: String,
    /// Noise seed used.
    pub seed: u32,
    /// Samples allocated.
    pub sample_count: usize,
    /// Samples produced.
    pub samples_written: usize,
    /// Whether the sound stopped before its allocation was full.
    pub finished_early: bool,
    /// Duration of the produced samples.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Written file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Render details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundSummary>,
    /// Errors, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Output of `uri --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UriOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// The data URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Render details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundSummary>,
    /// Errors, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// One entry of `bake --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BakedSound {
    /// Sound name in the bank.
    pub name: String,
    /// Written file path.
    pub path: String,
    /// Samples produced.
    pub samples_written: usize,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

/// Output of `bake --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BakeOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Output directory.
    pub out_dir: String,
    /// Baked sounds in name order.
    pub sounds: Vec<BakedSound>,
    /// Errors, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// One entry of `presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetInfo {
    /// Preset name.
    pub name: String,
    /// Waveform name.
    pub wave_type: String,
    /// Sparse settings string.
    pub settings: String,
}

/// Output of `presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetsOutput {
    /// Built-in presets in name order.
    pub presets: Vec<PresetInfo>,
}

/// Header fields reported by `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderInfo {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Declared data size in bytes.
    pub data_size: u32,
    /// Declared sample frames.
    pub sample_count: usize,
    /// Declared duration.
    pub duration_seconds: f64,
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Inspected file path.
    pub input: String,
    /// Parsed header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderInfo>,
    /// BLAKE3 hash of the PCM data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Errors, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_omits_empty_fields() {
        let output = RenderOutput {
            success: false,
            output: None,
            sound: None,
            errors: vec![JsonError::new(error_codes::INVALID_ARGS, "bad")],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "errors": [{ "code": "CLI_001", "message": "bad" }]
            })
        );
    }

    #[test]
    fn test_from_anyhow_prefers_chain_code() {
        let err = anyhow::Error::from(bleep_spec::SpecError::EmptyBank);
        let json_err = JsonError::from_anyhow(&err, error_codes::FILE_READ);
        assert_eq!(json_err.code, "E003");

        let plain = anyhow::anyhow!("disk full");
        assert_eq!(
            JsonError::from_anyhow(&plain, error_codes::FILE_WRITE).code,
            "CLI_002"
        );
    }
}
