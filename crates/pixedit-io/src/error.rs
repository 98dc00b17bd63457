//! I/O error types
//!
//! Provides a unified error type for all image I/O operations.
//! Each format-specific module maps its underlying library errors
//! into `IoError` variants so that callers only need to handle
//! one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, broken sink, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The extension is not one of the supported set, or the codec for it
    /// was disabled at build time
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is malformed or uses an unsupported variant
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. zero dimensions)
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
