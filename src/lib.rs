// md2docx - Markdown to DOCX converter
// Copyright (c) 2025 md2docx Contributors
// Licensed under the MIT License

//! # md2docx - Markdown to DOCX conversion via Pandoc
//!
//! md2docx converts Markdown documents into modern DOCX files by delegating
//! the text-to-document transformation to the external Pandoc binary, while
//! layering configuration, reference-template generation, and output
//! validation around that call.
//!
//! ## Architecture
//!
//! md2docx follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (conversion, argument synthesis, templates, validation)
//! - [`adapters`] - The external Pandoc boundary
//! - [`domain`] - Error taxonomy and request types
//! - [`config`] - Configuration resolution (defaults, file, environment)
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2docx::config::load_config;
//! use md2docx::core::convert::Converter;
//! use md2docx::domain::ConversionRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults, optional config file, MD2DOCX_* environment overrides
//!     let config = load_config(None)?;
//!
//!     let converter = Converter::new(config);
//!     let output = converter
//!         .convert(&ConversionRequest::new("report.md").toc(true).toc_depth(2))
//!         .await?;
//!
//!     println!("Created {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Reference Templates
//!
//! Pandoc copies paragraph and heading styles from a reference document into
//! its output. md2docx builds that reference deterministically from the
//! `[template]` configuration:
//!
//! ```rust,no_run
//! use md2docx::config::TemplateConfig;
//! use md2docx::core::template::TemplateBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let builder = TemplateBuilder::new(&TemplateConfig::default());
//! builder.create("reference.docx", true)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Three sources merge with defined precedence (highest last): compiled
//! defaults, an optional TOML/YAML file, `MD2DOCX_`-prefixed environment
//! variables:
//!
//! ```bash
//! export MD2DOCX_CONVERSION__DEFAULT_TOC=true
//! export MD2DOCX_TEMPLATE__BODY_FONT=Arial
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Md2DocxError`]:
//!
//! ```rust,no_run
//! use md2docx::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = md2docx::config::load_config(None)?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
