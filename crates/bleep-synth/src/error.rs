//! Error types for the synthesizer crate.
//!
//! Rendering itself cannot fail; errors come from parameter parsing, bank
//! lookups, file output and container inspection.

use bleep_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur around sound rendering.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Parameter or bank error.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes that are not a PCM WAV container.
    #[error("invalid WAV container: {message}")]
    InvalidContainer {
        /// What was wrong.
        message: String,
    },
}

impl AudioError {
    /// Creates an invalid container error.
    pub fn invalid_container(message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Spec(_) => "AUDIO_001",
            AudioError::Io(_) => "AUDIO_002",
            AudioError::InvalidContainer { .. } => "AUDIO_003",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_container_helper() {
        let err = AudioError::invalid_container("missing RIFF magic");
        assert!(err.to_string().contains("missing RIFF magic"));
        assert_eq!(err.code(), "AUDIO_003");
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_spec_error_is_transparent() {
        let err = AudioError::from(SpecError::unknown_sound("zap"));
        assert_eq!(err.to_string(), "unknown sound 'zap'");
        assert_eq!(err.code(), "AUDIO_001");
    }
}
