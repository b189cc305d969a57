//! Parsing of canonical 44-byte PCM WAV headers.

use crate::error::{AudioError, AudioResult};

use super::writer::HEADER_LEN;

/// Fields of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file size minus 8).
    pub riff_size: u32,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the `data` chunk in bytes.
    pub data_size: u32,
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl WavHeader {
    /// Parses the header at the start of `bytes`.
    ///
    /// Only the canonical layout is accepted: `fmt ` immediately after
    /// `WAVE`, uncompressed PCM, and `data` at offset 36.
    pub fn parse(bytes: &[u8]) -> AudioResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(AudioError::invalid_container(format!(
                "expected at least {} bytes, found {}",
                HEADER_LEN,
                bytes.len()
            )));
        }
        if &bytes[0..4] != b"RIFF" {
            return Err(AudioError::invalid_container("missing RIFF magic"));
        }
        if &bytes[8..12] != b"WAVE" {
            return Err(AudioError::invalid_container("missing WAVE magic"));
        }
        if &bytes[12..16] != b"fmt " || u32_at(bytes, 16) != 16 {
            return Err(AudioError::invalid_container("missing 16-byte fmt chunk"));
        }
        let audio_format = u16_at(bytes, 20);
        if audio_format != 1 {
            return Err(AudioError::invalid_container(format!(
                "unsupported audio format {}",
                audio_format
            )));
        }
        if &bytes[36..40] != b"data" {
            return Err(AudioError::invalid_container("missing data chunk"));
        }

        Ok(Self {
            riff_size: u32_at(bytes, 4),
            channels: u16_at(bytes, 22),
            sample_rate: u32_at(bytes, 24),
            byte_rate: u32_at(bytes, 28),
            block_align: u16_at(bytes, 32),
            bits_per_sample: u16_at(bytes, 34),
            data_size: u32_at(bytes, 40),
        })
    }

    /// Number of sample frames declared by the data chunk.
    pub fn sample_count(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / self.block_align as usize
    }

    /// Declared duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count() as f64 / self.sample_rate as f64
    }
}
