//! Validate config command implementation
//!
//! Resolves the full configuration (defaults, file, environment) and prints a
//! summary, or the error that made resolution fail.

use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        match config_path {
            Some(path) => println!("🔍 Validating configuration file: {}", path.display()),
            None => println!("🔍 Validating configuration (defaults + environment)"),
        }
        println!();

        let config = match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                config
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Reader Format: {}", config.pandoc.reader_format);
        println!("  Writer Format: {}", config.pandoc.writer_format);
        println!("  Minimum Pandoc: {}", config.pandoc.min_version);
        println!("  Timeout: {}s", config.pandoc.timeout_seconds);
        println!("  Page Size: {}", config.template.page_size);
        println!("  Margin: {} cm", config.template.margin_cm);
        println!(
            "  Body Font: {} {}pt",
            config.template.body_font, config.template.body_size_pt
        );
        println!(
            "  Code Font: {} {}pt",
            config.template.code_font, config.template.code_size_pt
        );
        println!("  TOC by default: {}", config.conversion.default_toc);
        println!("  TOC depth: {}", config.conversion.default_toc_depth);
        println!("  Validate output: {}", config.conversion.validate_output);
        println!(
            "  Overwrite existing: {}",
            config.conversion.overwrite_existing
        );
        println!("  Log Level: {}", config.logging.level);
        println!();
        Ok(0)
    }
}
