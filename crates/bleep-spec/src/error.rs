//! Error types for parameter parsing and sound bank loading.

use thiserror::Error;

/// Error codes for parameter and bank errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: A settings token is not a number
    InvalidNumber,
    /// E002: A sound name is not present in the bank
    UnknownSound,
    /// E003: A bank declares no sounds
    EmptyBank,
    /// E004: Bank JSON could not be parsed
    InvalidJson,
    /// E005: Reading or writing a file failed
    Io,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidNumber => "E001",
            ErrorCode::UnknownSound => "E002",
            ErrorCode::EmptyBank => "E003",
            ErrorCode::InvalidJson => "E004",
            ErrorCode::Io => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while turning text or JSON into parameter vectors.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A token in a settings string is not a number.
    #[error("invalid number at position {index}: '{token}'")]
    InvalidNumber {
        /// Zero-based position of the token.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// A named sound is not in the bank.
    #[error("unknown sound '{name}'")]
    UnknownSound {
        /// The requested name.
        name: String,
    },

    /// A bank has no entries.
    #[error("sound bank contains no sounds")]
    EmptyBank,

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Returns the stable error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SpecError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            SpecError::UnknownSound { .. } => ErrorCode::UnknownSound,
            SpecError::EmptyBank => ErrorCode::EmptyBank,
            SpecError::Json(_) => ErrorCode::InvalidJson,
            SpecError::Io(_) => ErrorCode::Io,
        }
    }

    /// Creates an unknown sound error.
    pub fn unknown_sound(name: impl Into<String>) -> Self {
        Self::UnknownSound { name: name.into() }
    }
}

/// Result type for parameter and bank operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Trait implemented by backend error types for uniform reporting.
///
/// ```ignore
/// use bleep_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Stable code like "AUDIO_001".
    fn code(&self) -> &'static str;

    /// Human-readable message, usually the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping, e.g. "audio".
    fn category(&self) -> &'static str;
}
