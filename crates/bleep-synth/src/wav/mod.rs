//! Deterministic WAV file writer.
//!
//! Writes 16-bit mono PCM WAV files with no timestamps or variable metadata,
//! so identical samples always give identical bytes. The hash of the PCM
//! data identifies a sound independently of its header.

mod format;
mod header;
mod pcm;
mod writer;

#[cfg(test)]
mod tests;

pub use format::WavFormat;
pub use header::WavHeader;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use writer::{
    header_bytes, pcm16_to_bytes, quantize, write_wav, write_wav_to_vec, HEADER_LEN,
};
