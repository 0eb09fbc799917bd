//! Init command implementation
//!
//! Generates a commented sample configuration file.

use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "md2docx.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing configuration file");

        println!("📝 Initializing md2docx configuration");
        println!();

        if self.output.exists() && !self.force {
            println!(
                "❌ Configuration file already exists: {}",
                self.output.display()
            );
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output.display());
                println!("  2. Validate configuration: md2docx validate-config --config {}", self.output.display());
                println!("  3. Create a reference template: md2docx template reference.docx");
                println!("  4. Convert a document: md2docx convert document.md");
                println!();
                println!("Any setting can also be overridden per environment:");
                println!("  MD2DOCX_CONVERSION__DEFAULT_TOC=true");
                println!("  MD2DOCX_TEMPLATE__BODY_FONT=Arial");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration with comments
    fn generate_sample_config() -> String {
        r#"# md2docx Configuration File
# Markdown to DOCX converter
#
# Every value below shows its compiled-in default; delete what you don't
# change. Each key can also be set through the environment with the MD2DOCX_
# prefix and a double underscore between section and key, e.g.
# MD2DOCX_PANDOC__TIMEOUT_SECONDS=120.

[pandoc]
# Minimum recommended Pandoc version (older versions log a warning)
min_version = "2.19"

# Markdown reader format with extensions
reader_format = "gfm+footnotes+tex_math_dollars+fenced_divs+bracketed_spans"

# DOCX writer format
writer_format = "docx+styles"

# Timeout for a single Pandoc invocation, in seconds
timeout_seconds = 300

[template]
# Page size preset: "A4" or "Letter"
page_size = "A4"

# Page margin in centimeters on all four sides
margin_cm = 2.54

# Body text font and size
body_font = "Calibri"
body_size_pt = 11

# Heading font
heading_font = "Calibri"

# Code block font and size
code_font = "Consolas"
code_size_pt = 9

[conversion]
# Include a table of contents by default
default_toc = false

# Default table of contents depth (1-6)
default_toc_depth = 3

# Validate output DOCX files after conversion
validate_output = false

# Copy an existing output file to <output>.bak before overwriting
create_backup = false

# Overwrite existing output files
overwrite_existing = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log output format: "text" or "json"
format = "text"

# Optional log file path
# file_path = "/var/log/md2docx/md2docx.log"
"#
        .to_string()
    }
}
