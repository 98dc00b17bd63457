//! Error types for the image store
//!
//! Every store operation reports a [`StoreError`]. Failures from the
//! lower crates are either mapped onto the store's own kinds (a decode
//! failure is always [`StoreError::DecodeError`], a kernel that does not
//! fit is always [`StoreError::InvalidKernel`]) or carried unchanged in a
//! wrapper variant.

use pixedit_color::ColorError;
use pixedit_filter::FilterError;
use pixedit_io::IoError;
use pixedit_transform::TransformError;
use thiserror::Error;

/// Image store error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// Name is empty or contains a space
    #[error("invalid image name: '{0}'")]
    InvalidName(String),

    /// No image is bound to the name
    #[error("no image named '{0}'")]
    NotFound(String),

    /// Source and destination name are the same
    #[error("destination '{0}' is the same as the source")]
    NameCollision(String),

    /// Extension outside the supported set, or its codec was not built
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File missing or unreadable, or its contents malformed
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Kernel unusable for this image
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// The output sink refused the encoded bytes
    #[error("write error: {0}")]
    WriteError(#[source] std::io::Error),

    /// Encoder failure
    #[error("encode error: {0}")]
    Encode(#[source] IoError),

    /// Geometric transform failure
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Color transform failure
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// Core library failure
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),
}

impl From<FilterError> for StoreError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::InvalidKernel(msg) => StoreError::InvalidKernel(msg),
            FilterError::Core(e) => StoreError::Core(e),
        }
    }
}

impl StoreError {
    /// Classify a failure while reading an image.
    pub(crate) fn from_decode(err: IoError) -> Self {
        match err {
            IoError::UnsupportedFormat(msg) => StoreError::UnsupportedFormat(msg),
            other => StoreError::DecodeError(other.to_string()),
        }
    }

    /// Classify a failure while encoding an image.
    pub(crate) fn from_encode(err: IoError) -> Self {
        match err {
            IoError::UnsupportedFormat(msg) => StoreError::UnsupportedFormat(msg),
            other => StoreError::Encode(other),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_errors_map() {
        let err: StoreError = FilterError::InvalidKernel("too big".to_string()).into();
        assert!(matches!(err, StoreError::InvalidKernel(m) if m == "too big"));
    }

    #[test]
    fn test_decode_classification() {
        let err = StoreError::from_decode(IoError::DecodeError("bad".to_string()));
        assert!(matches!(err, StoreError::DecodeError(_)));
        let err = StoreError::from_decode(IoError::Io(std::io::Error::other("gone")));
        assert!(matches!(err, StoreError::DecodeError(_)));
        let err = StoreError::from_decode(IoError::UnsupportedFormat(".gif".to_string()));
        assert!(matches!(err, StoreError::UnsupportedFormat(_)));
    }
}
