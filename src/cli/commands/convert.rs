//! Convert command implementation

use crate::config::load_config;
use crate::core::convert::Converter;
use crate::domain::errors::Md2DocxError;
use crate::domain::request::ConversionRequest;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input Markdown file path
    pub input: PathBuf,

    /// Output DOCX file path (default: input file with .docx extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reference DOCX template file for styling
    #[arg(long, visible_alias = "reference-doc")]
    pub template: Option<PathBuf>,

    /// Include a table of contents in the output
    #[arg(long, conflicts_with = "no_toc")]
    pub toc: bool,

    /// Exclude the table of contents, overriding the configured default
    #[arg(long)]
    pub no_toc: bool,

    /// Table of contents depth (1-6, default from config)
    #[arg(long, value_name = "N")]
    pub toc_depth: Option<u8>,

    /// Validate the output DOCX file after conversion
    #[arg(long, conflicts_with = "no_validate")]
    pub validate: bool,

    /// Skip output validation, overriding the configured default
    #[arg(long)]
    pub no_validate: bool,

    /// Extra argument passed to Pandoc verbatim (repeatable)
    #[arg(long = "pandoc-arg", value_name = "ARG")]
    pub pandoc_args: Vec<String>,
}

impl ConvertArgs {
    /// The table of contents override, `None` when neither flag was given
    pub fn toc_override(&self) -> Option<bool> {
        flag_pair(self.toc, self.no_toc)
    }

    /// The validation override, `None` when neither flag was given
    pub fn validate_override(&self) -> Option<bool> {
        flag_pair(self.validate, self.no_validate)
    }

    /// Execute the convert command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Converting Markdown to DOCX");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let mut request = ConversionRequest::new(&self.input)
            .pandoc_args(self.pandoc_args.iter().cloned());
        if let Some(output) = &self.output {
            request = request.output(output);
        }
        if let Some(template) = &self.template {
            request = request.template(template);
        }
        if let Some(toc) = self.toc_override() {
            request = request.toc(toc);
        }
        if let Some(depth) = self.toc_depth {
            request = request.toc_depth(depth);
        }
        if let Some(validate) = self.validate_override() {
            request = request.validate_output(validate);
        }

        let converter = Converter::new(config);
        match converter.convert(&request).await {
            Ok(output) => {
                println!(
                    "✅ Successfully converted {} to {}",
                    self.input.display(),
                    output.display()
                );
                if let Some(template) = &self.template {
                    println!("   🎨 Template: {}", template.display());
                }
                Ok(0)
            }
            Err(e @ Md2DocxError::Configuration(_)) => {
                println!("❌ Conversion failed");
                println!("   Error: {e}");
                Ok(2)
            }
            Err(e) => {
                tracing::error!(error = %e, "Conversion failed");
                println!("❌ Conversion failed");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }
}

fn flag_pair(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
