//! WAV header and PCM sample writing.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// Builds the 44-byte header for `data_size` bytes of PCM.
pub fn header_bytes(format: &WavFormat, data_size: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    // total file size minus the 8-byte RIFF preamble
    let riff_size = data_size.saturating_add(36);

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "PCM data exceeds 4 GiB"))?;
    writer.write_all(&header_bytes(format, data_size))?;
    writer.write_all(pcm_data)
}

/// Builds a WAV file in memory.
///
/// Sample counts are capped far below the 4 GiB RIFF limit, so the size
/// fields always fit.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let data_size = u32::try_from(pcm_data.len()).unwrap_or(u32::MAX);
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header_bytes(format, data_size));
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Quantizes one sample to 16-bit PCM.
///
/// Values at or beyond full scale clip to `32767` / `-32768`; everything in
/// between truncates toward zero. NaN maps to 0.
pub fn quantize(sample: f64) -> i16 {
    if sample >= 1.0 {
        i16::MAX
    } else if sample <= -1.0 {
        i16::MIN
    } else {
        (sample * 32767.0) as i16
    }
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
