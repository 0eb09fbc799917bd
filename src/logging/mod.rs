//! Logging and observability
//!
//! Structured logging with configurable level, text or JSON output, and an
//! optional log file.
//!
//! # Example
//!
//! ```no_run
//! use md2docx::config::LoggingConfig;
//! use md2docx::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
