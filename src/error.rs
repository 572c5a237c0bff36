//! Error types for the generator.
//!
//! Defines the error codes and types used throughout the crate for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes returned by generator operations.
///
/// The only failure modes are filesystem ones: the synthesis itself is a
/// fixed computation over hardcoded parameters and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Could not create the output directory.
    /// Trigger: missing permissions or a regular file occupying the path.
    OutputDirFailed,

    /// Failed to create, write, or finalize a WAV file.
    /// Trigger: missing permissions, disk full, or the file held open.
    WavWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "OUTPUT_DIR_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "Could not create the output directory",
            ErrorCode::WavWriteFailed => "Failed to write a WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => {
                "Check write permissions for the working directory and that no \
                 regular file occupies the output path"
            }
            ErrorCode::WavWriteFailed => {
                "Check free disk space and write permissions for the output \
                 directory, and that the file is not open in another program"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct Error {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Creates a new Error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new Error with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUTPUT_DIR_FAILED error.
    pub fn output_dir_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputDirFailed,
            format!("Could not create output directory: {}", path.into()),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(path: impl Into<String>, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::WavWriteFailed,
            format!("Failed to write WAV file: {}", path.into()),
            source,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;
