//! Asset encoding: parameter vector in, WAV container and data URI out.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bleep_spec::hash::derive_params_seed;
use bleep_spec::ParameterSet;
use tracing::debug;

use crate::error::AudioResult;
use crate::synth::{Synthesizer, SAMPLE_RATE};
use crate::wav::{pcm16_to_bytes, pcm_hash, write_wav_to_vec, WavFormat, HEADER_LEN};

/// Scheme prefix of every data URI this crate produces.
pub const DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

/// A rendered sound: WAV container bytes plus render bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAsset {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Samples actually produced before the sound finished.
    pub samples_written: usize,
    /// Samples allocated for the render.
    pub sample_count: usize,
}

impl RenderedAsset {
    /// The container as a `data:audio/wav;base64,` URI.
    pub fn data_uri(&self) -> String {
        encode_data_uri(&self.wav_data)
    }

    /// The PCM region after the header.
    pub fn pcm_bytes(&self) -> &[u8] {
        self.wav_data.get(HEADER_LEN..).unwrap_or_default()
    }

    /// The PCM region decoded to samples.
    pub fn pcm_samples(&self) -> Vec<i16> {
        self.pcm_bytes()
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    /// Whether the sound finished before filling its allocation.
    pub fn finished_early(&self) -> bool {
        self.samples_written < self.sample_count
    }

    /// Duration of the written samples in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples_written as f64 / SAMPLE_RATE as f64
    }

    /// Writes the WAV container to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> AudioResult<()> {
        std::fs::write(path, &self.wav_data)?;
        Ok(())
    }
}

/// Encodes bytes as a WAV data URI with standard base64 padding.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(bytes, &mut uri);
    uri
}

/// Renders a positional parameter vector.
///
/// Missing values are zero and extra values are ignored. The noise seed is
/// derived from the normalized parameters, so equal vectors always give
/// byte-identical containers.
///
/// # Example
/// ```
/// let asset = bleep_synth::build(&[0.0, 0.0, 0.1434, 0.0, 0.1212, 0.4471]);
/// assert!(asset.data_uri().starts_with("data:audio/wav;base64,UklGR"));
/// assert_eq!(asset.wav_data.len(), 44 + 2 * asset.samples_written);
/// ```
pub fn build(values: &[f64]) -> RenderedAsset {
    let params = ParameterSet::normalize(values);
    let seed = derive_params_seed(&params);
    build_params(params, seed)
}

/// Renders a positional parameter vector with an explicit noise seed.
pub fn build_with_seed(values: &[f64], seed: u32) -> RenderedAsset {
    build_params(ParameterSet::normalize(values), seed)
}

/// Renders an already normalized parameter set.
pub fn build_params(params: ParameterSet, seed: u32) -> RenderedAsset {
    let mut synth = Synthesizer::new(params, seed);
    let sample_count = synth.sample_count();

    let mut pcm = vec![0i16; sample_count];
    let samples_written = synth.render(&mut pcm);
    pcm.truncate(samples_written);

    let pcm_data = pcm16_to_bytes(&pcm);
    let asset = RenderedAsset {
        wav_data: write_wav_to_vec(&WavFormat::default(), &pcm_data),
        pcm_hash: pcm_hash(&pcm_data),
        samples_written,
        sample_count,
    };

    debug!(
        wave = %synth.params().wave_type,
        sample_count,
        samples_written,
        finished_early = asset.finished_early(),
        "rendered sound"
    );
    asset
}
