//! Configuration management for md2docx.
//!
//! Settings come from three sources, merged with defined precedence
//! (highest last):
//!
//! 1. Compiled-in defaults
//! 2. An optional TOML or YAML configuration file
//! 3. `MD2DOCX_`-prefixed environment variables
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use md2docx::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Compiled defaults plus any MD2DOCX_* environment overrides
//! let config = load_config(None)?;
//!
//! println!("Reader format: {}", config.pandoc.reader_format);
//! println!("Page size: {}", config.template.page_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! A double underscore separates section from key:
//!
//! ```bash
//! export MD2DOCX_CONVERSION__DEFAULT_TOC=true
//! export MD2DOCX_TEMPLATE__BODY_FONT=Arial
//! export MD2DOCX_LOGGING__LEVEL=debug
//! ```
//!
//! # Example Configuration File
//!
//! ```toml
//! [pandoc]
//! reader_format = "gfm+footnotes"
//! timeout_seconds = 120
//!
//! [template]
//! page_size = "Letter"
//! body_font = "Georgia"
//!
//! [conversion]
//! default_toc = true
//! default_toc_depth = 2
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{
    coerce_value, load_config, load_override_file, merge_maps, parse_env_overrides, resolve_from,
    ENV_PREFIX,
};
pub use schema::{
    ConversionConfig, LoggingConfig, Md2DocxConfig, PageSize, PandocConfig, TemplateConfig,
};
