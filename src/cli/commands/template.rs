//! Template command implementation
//!
//! Creates a reference DOCX template whose styles are derived from the
//! `[template]` configuration section.

use crate::config::load_config;
use crate::core::template::TemplateBuilder;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the template command
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Path where the template should be created
    pub output: PathBuf,

    /// Omit the sample content that previews each style
    #[arg(long)]
    pub no_sample: bool,
}

impl TemplateArgs {
    /// Execute the template command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Creating reference template");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let builder = TemplateBuilder::new(&config.template);
        match builder.create(&self.output, !self.no_sample) {
            Ok(path) => {
                println!("✅ Created reference DOCX template: {}", path.display());
                println!("   📐 Page size: {}", config.template.page_size);
                println!(
                    "   🔤 Fonts: {} / {}",
                    config.template.body_font, config.template.code_font
                );
                if !self.no_sample {
                    println!("   📄 Template includes sample content for preview");
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Template creation failed");
                println!("❌ Template creation failed");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_args_defaults() {
        let args = TemplateArgs {
            output: PathBuf::from("reference.docx"),
            no_sample: false,
        };
        assert_eq!(args.output, PathBuf::from("reference.docx"));
        assert!(!args.no_sample);
    }
}
