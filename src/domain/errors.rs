//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Configuration and argument errors are raised before any external call is
//! made; Pandoc failures are translated at the invocation boundary; validation
//! errors are raised only after an output file was actually produced.

use std::path::PathBuf;
use thiserror::Error;

/// Main md2docx error type
///
/// This is the primary error type used throughout the crate. Every failure a
/// caller can observe maps onto one of these variants.
#[derive(Debug, Error)]
pub enum Md2DocxError {
    /// Configuration-related errors (malformed file, unsupported format,
    /// unknown key, wrong value type)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pandoc is not installed or not found on PATH
    #[error("Pandoc not found. Install Pandoc from https://pandoc.org/installing.html")]
    PandocNotFound,

    /// Pandoc-related failures outside a conversion (e.g. version probing)
    #[error("Pandoc error: {0}")]
    Pandoc(String),

    /// Pandoc ran but reported failure, or threw during invocation
    #[error("Conversion failed for {}: {message}", .input.display())]
    Conversion {
        /// Input file the conversion was operating on
        input: PathBuf,
        /// Description of the failure, carrying the original cause
        message: String,
    },

    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input path exists but is not a regular file
    #[error("Input path is not a regular file: {}", .0.display())]
    InputNotAFile(PathBuf),

    /// Output file exists and overwriting is disabled
    #[error("Output file already exists and overwrite is disabled: {}", .0.display())]
    OutputConflict(PathBuf),

    /// Table of contents depth outside the valid range
    #[error("Table of contents depth must be between 1 and 6, got {0}")]
    TocDepthOutOfRange(i64),

    /// Output DOCX validation failed, carrying every detected problem
    #[error("DOCX validation failed for {}: {}", .output.display(), .problems.join("; "))]
    Validation {
        /// Path of the file that failed validation
        output: PathBuf,
        /// Accumulated list of distinct problem descriptions
        problems: Vec<String>,
    },

    /// Template construction errors
    #[error("Template error: {0}")]
    Template(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for Md2DocxError {
    fn from(err: std::io::Error) -> Self {
        Md2DocxError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for Md2DocxError {
    fn from(err: toml::de::Error) -> Self {
        Md2DocxError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from serde_json errors (settings construction)
impl From<serde_json::Error> for Md2DocxError {
    fn from(err: serde_json::Error) -> Self {
        Md2DocxError::Configuration(err.to_string())
    }
}
