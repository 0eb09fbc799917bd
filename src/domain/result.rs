//! Result type alias for md2docx

use super::errors::Md2DocxError;

/// Result type alias for md2docx operations
///
/// Convenience alias that uses `Md2DocxError` as the error type. Use this
/// throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, Md2DocxError>;
