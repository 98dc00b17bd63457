//! Error types for pixedit-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error (e.g. destination size mismatch)
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
