//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;

use super::format::WavFormat;
use super::header::WavHeader;
use super::pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
use super::writer::{header_bytes, pcm16_to_bytes, quantize, write_wav, write_wav_to_vec};
use crate::error::AudioError;

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_default_is_synth_output() {
    let format = WavFormat::default();
    assert_eq!(format, WavFormat::mono(44100));
    assert_eq!(format.channels, 1);
    assert_eq!(format.bits_per_sample, 16);
}

#[test]
fn test_derived_rates() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    // 44100 samples/sec * 2 bytes/sample
    assert_eq!(format.byte_rate(), 88200);
}

// =========================================================================
// Quantization tests
// =========================================================================

#[test]
fn test_quantize_full_scale_clips() {
    assert_eq!(quantize(1.0), 32767);
    assert_eq!(quantize(7.5), 32767);
    assert_eq!(quantize(f64::INFINITY), 32767);
    assert_eq!(quantize(-1.0), -32768);
    assert_eq!(quantize(-3.0), -32768);
    assert_eq!(quantize(f64::NEG_INFINITY), -32768);
}

#[test]
fn test_quantize_truncates_toward_zero() {
    assert_eq!(quantize(0.0), 0);
    assert_eq!(quantize(0.5), 16383);
    assert_eq!(quantize(-0.5), -16383);
    assert_eq!(quantize(0.99999), 32766);
    assert_eq!(quantize(1.0 / 32767.0 * 0.9), 0);
}

#[test]
fn test_quantize_nan_is_silence() {
    assert_eq!(quantize(f64::NAN), 0);
}

#[test]
fn test_quantize_stays_in_range() {
    for i in -2000..=2000 {
        let sample = i as f64 / 1000.0;
        let q = quantize(sample);
        if sample >= 1.0 {
            assert_eq!(q, i16::MAX);
        } else if sample <= -1.0 {
            assert_eq!(q, i16::MIN);
        } else {
            assert!(q > i16::MIN && q < i16::MAX);
        }
    }
}

#[test]
fn test_pcm16_to_bytes_little_endian() {
    let pcm = pcm16_to_bytes(&[1, -1, 0x1234]);
    assert_eq!(pcm, vec![0x01, 0x00, 0xFF, 0xFF, 0x34, 0x12]);
}

// =========================================================================
// Header layout tests
// =========================================================================

#[test]
fn test_header_layout() {
    let header = header_bytes(&WavFormat::default(), 200);

    assert_eq!(&header[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([header[4], header[5], header[6], header[7]]), 236);
    assert_eq!(&header[8..12], b"WAVE");
    assert_eq!(&header[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes([header[16], header[17], header[18], header[19]]), 16);
    assert_eq!(u16::from_le_bytes([header[20], header[21]]), 1);
    assert_eq!(u16::from_le_bytes([header[22], header[23]]), 1);
    assert_eq!(
        u32::from_le_bytes([header[24], header[25], header[26], header[27]]),
        44100
    );
    assert_eq!(
        u32::from_le_bytes([header[28], header[29], header[30], header[31]]),
        88200
    );
    assert_eq!(u16::from_le_bytes([header[32], header[33]]), 2);
    assert_eq!(u16::from_le_bytes([header[34], header[35]]), 16);
    assert_eq!(&header[36..40], b"data");
    assert_eq!(u32::from_le_bytes([header[40], header[41], header[42], header[43]]), 200);
}

#[test]
fn test_write_wav_matches_vec() {
    let pcm = pcm16_to_bytes(&[100, -100, 5000]);
    let mut streamed = Vec::new();
    write_wav(&mut streamed, &WavFormat::default(), &pcm).expect("write to Vec");
    assert_eq!(streamed, write_wav_to_vec(&WavFormat::default(), &pcm));
    assert_eq!(streamed.len(), 44 + 6);
}

#[test]
fn test_empty_pcm() {
    let wav = write_wav_to_vec(&WavFormat::default(), &[]);
    assert_eq!(wav.len(), 44);
    assert_eq!(extract_pcm_data(&wav), Some(&[][..]));
}

// =========================================================================
// Header parsing tests
// =========================================================================

#[test]
fn test_parse_round_trips_written_header() {
    let pcm = pcm16_to_bytes(&[0; 30]);
    let wav = write_wav_to_vec(&WavFormat::default(), &pcm);
    let header = WavHeader::parse(&wav).expect("valid header");

    assert_eq!(
        header,
        WavHeader {
            riff_size: 96,
            channels: 1,
            sample_rate: 44100,
            byte_rate: 88200,
            block_align: 2,
            bits_per_sample: 16,
            data_size: 60,
        }
    );
    assert_eq!(header.sample_count(), 30);
    assert!((header.duration_seconds() - 30.0 / 44100.0).abs() < 1e-12);
}

#[test]
fn test_parse_rejects_short_input() {
    let err = WavHeader::parse(b"RIFF").unwrap_err();
    assert!(matches!(err, AudioError::InvalidContainer { .. }));
    assert!(err.to_string().contains("at least 44 bytes"));
}

#[test]
fn test_parse_rejects_bad_magic() {
    let mut wav = write_wav_to_vec(&WavFormat::default(), &[0, 0]);
    wav[0..4].copy_from_slice(b"RIFX");
    assert!(WavHeader::parse(&wav)
        .unwrap_err()
        .to_string()
        .contains("RIFF"));

    let mut wav = write_wav_to_vec(&WavFormat::default(), &[0, 0]);
    wav[8..12].copy_from_slice(b"AVI ");
    assert!(WavHeader::parse(&wav)
        .unwrap_err()
        .to_string()
        .contains("WAVE"));
}

#[test]
fn test_parse_rejects_compressed_format() {
    let mut wav = write_wav_to_vec(&WavFormat::default(), &[0, 0]);
    wav[20..22].copy_from_slice(&3u16.to_le_bytes());
    assert!(WavHeader::parse(&wav)
        .unwrap_err()
        .to_string()
        .contains("audio format 3"));
}

// =========================================================================
// PCM extraction and hashing tests
// =========================================================================

#[test]
fn test_extract_pcm_data() {
    let pcm = pcm16_to_bytes(&[7; 100]);
    let wav = write_wav_to_vec(&WavFormat::default(), &pcm);
    assert_eq!(extract_pcm_data(&wav), Some(pcm.as_slice()));
}

#[test]
fn test_extract_rejects_truncated_data() {
    let pcm = pcm16_to_bytes(&[7; 100]);
    let wav = write_wav_to_vec(&WavFormat::default(), &pcm);
    assert_eq!(extract_pcm_data(&wav[..100]), None);
    assert_eq!(extract_pcm_data(b"not a wav file at all, definitely not one!!"), None);
}

#[test]
fn test_compute_pcm_hash_matches_direct_hash() {
    let pcm = pcm16_to_bytes(&[1, 2, 3, 4]);
    let wav = write_wav_to_vec(&WavFormat::default(), &pcm);
    let hash = compute_pcm_hash(&wav).expect("should compute hash");
    assert_eq!(hash, pcm_hash(&pcm));
    // BLAKE3 produces 64 hex chars
    assert_eq!(hash.len(), 64);
}

#[test]
fn test_pcm_hash_differs_for_different_samples() {
    let a = pcm_hash(&pcm16_to_bytes(&[1, 2, 3]));
    let b = pcm_hash(&pcm16_to_bytes(&[1, 2, 4]));
    assert_ne!(a, b);
}
