//! Bleep synthesizer
//!
//! Renders 24-value sfxr-style parameter vectors into 16-bit mono WAV
//! containers and `data:audio/wav;base64,` URIs.
//!
//! # Overview
//!
//! Each output sample runs the same pipeline:
//!
//! - **Modulation** - pitch slide, one-shot pitch change, vibrato, repeat
//! - **Oscillator** - square (with duty sweep), sawtooth, sine or noise,
//!   oversampled 8 times
//! - **Filters** - resonant low-pass feeding a leaky high-pass
//! - **Phaser** - swept comb filter over a 1024-sample ring
//! - **Envelope** - attack, punchy sustain, decay
//!
//! # Determinism
//!
//! Rendering is bit-exact for a given parameter set and seed. Only the noise
//! waveform is random; it draws from PCG32 seeded either explicitly or from a
//! BLAKE3 hash of the normalized parameters.
//!
//! # Example
//!
//! ```
//! use bleep_spec::presets;
//!
//! let asset = bleep_synth::build(&presets::JUMP);
//! assert_eq!(&asset.wav_data[0..4], b"RIFF");
//! assert!(!asset.finished_early());
//!
//! let uri = asset.data_uri();
//! assert!(uri.starts_with("data:audio/wav;base64,"));
//! ```
//!
//! # Crate Structure
//!
//! - [`build()`] - Main entry point: parameter vector to [`RenderedAsset`]
//! - [`synth`] - The synthesizer and its stages
//! - [`wav`] - Deterministic WAV writer and header parsing
//! - [`bank`] - Baking whole sound banks
//! - [`playback`] - Handles that hand assets to a platform sink
//! - [`rng`] - Deterministic RNG for the noise oscillator

pub mod bank;
pub mod encode;
pub mod error;
pub mod playback;
pub mod rng;
pub mod synth;
pub mod wav;

pub use bank::{bake, bake_handles};
pub use encode::{
    build, build_params, build_with_seed, encode_data_uri, RenderedAsset, DATA_URI_PREFIX,
};
pub use error::{AudioError, AudioResult};
pub use playback::{PlaybackSink, SoundHandle};
pub use synth::{Synthesizer, MAX_SAMPLE_COUNT, SAMPLE_RATE};
