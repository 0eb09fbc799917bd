//! Domain types for md2docx.
//!
//! This module contains the crate's core types and business rules:
//!
//! - **Error taxonomy** ([`Md2DocxError`]) and the [`Result`] alias
//! - **Per-call conversion input** ([`ConversionRequest`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, Md2DocxError>`]:
//!
//! ```rust,no_run
//! use md2docx::domain::Result;
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = md2docx::config::load_config(None)?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod request;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::Md2DocxError;
pub use request::ConversionRequest;
pub use result::Result;
