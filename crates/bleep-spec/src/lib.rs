//! Bleep sound parameters.
//!
//! This crate holds the data side of the bleep synthesizer: the 24-value
//! parameter vector, its normalized form, the built-in presets, and JSON sound
//! banks. It has no audio code; see `bleep-synth` for rendering.
//!
//! # Example
//!
//! ```
//! use bleep_spec::{ParameterSet, WaveType};
//!
//! let params = ParameterSet::from_settings("0,,0.1434,,0.1212,0.4471").unwrap();
//! assert_eq!(params.wave_type, WaveType::Square);
//! assert_eq!(params.start_frequency, 0.4471);
//!
//! // The envelope is stretched to at least 0.18 in total
//! let short = ParameterSet::normalize(&[0.0, 0.0, 0.05]);
//! assert!(short.attack_time + short.sustain_time + short.decay_time >= 0.18 - 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`params`]: Parameter vector layout, normalization, settings strings
//! - [`presets`]: Built-in sound presets
//! - [`bank`]: JSON sound banks
//! - [`hash`]: Parameter hashing and seed derivation
//! - [`error`]: Error types

pub mod bank;
pub mod error;
pub mod hash;
pub mod params;
pub mod presets;

pub use bank::SoundBank;
pub use error::{BackendError, ErrorCode, SpecError, SpecResult};
pub use params::{parse_settings, ParameterSet, WaveType, PARAM_COUNT, PARAM_NAMES};
