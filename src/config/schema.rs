//! Configuration schema types
//!
//! This module defines the settings tree for md2docx. Every field carries a
//! compiled-in default, so a deserialized config is always fully populated.
//! Unknown keys are rejected at construction time via `deny_unknown_fields`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Page size preset for the reference template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PageSize {
    /// ISO A4 (21.0 x 29.7 cm)
    #[default]
    #[serde(alias = "a4")]
    A4,
    /// US Letter (8.5 x 11.0 in)
    #[serde(alias = "letter")]
    Letter,
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageSize::A4 => write!(f, "A4"),
            PageSize::Letter => write!(f, "Letter"),
        }
    }
}

/// Main md2docx configuration
///
/// This is the root settings structure that maps to the TOML/YAML file and to
/// `MD2DOCX_SECTION__KEY` environment overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Md2DocxConfig {
    /// Pandoc invocation settings
    pub pandoc: PandocConfig,

    /// Reference template styling settings
    pub template: TemplateConfig,

    /// Conversion behavior defaults
    pub conversion: ConversionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Md2DocxConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.pandoc.validate()?;
        self.template.validate()?;
        self.conversion.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Pandoc-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PandocConfig {
    /// Minimum recommended Pandoc version; older versions log a warning
    pub min_version: String,

    /// Markdown reader format, base format plus extension flags
    pub reader_format: String,

    /// DOCX writer format
    pub writer_format: String,

    /// Timeout for a single Pandoc invocation, in seconds
    pub timeout_seconds: u64,
}

impl Default for PandocConfig {
    fn default() -> Self {
        Self {
            min_version: "2.19".to_string(),
            reader_format: "gfm+footnotes+tex_math_dollars+fenced_divs+bracketed_spans"
                .to_string(),
            writer_format: "docx+styles".to_string(),
            timeout_seconds: 300,
        }
    }
}

impl PandocConfig {
    fn validate(&self) -> Result<(), String> {
        if self.reader_format.is_empty() {
            return Err("pandoc.reader_format must not be empty".to_string());
        }
        if self.writer_format.is_empty() {
            return Err("pandoc.writer_format must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("pandoc.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Reference template styling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Page size preset (A4 or Letter)
    pub page_size: PageSize,

    /// Page margin in centimeters on all four sides
    pub margin_cm: f64,

    /// Body text font
    pub body_font: String,

    /// Body text size in points
    pub body_size_pt: u32,

    /// Heading font
    pub heading_font: String,

    /// Code block font
    pub code_font: String,

    /// Code block font size in points
    pub code_size_pt: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_cm: 2.54,
            body_font: "Calibri".to_string(),
            body_size_pt: 11,
            heading_font: "Calibri".to_string(),
            code_font: "Consolas".to_string(),
            code_size_pt: 9,
        }
    }
}

impl TemplateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.margin_cm <= 0.0 {
            return Err(format!(
                "template.margin_cm must be positive, got {}",
                self.margin_cm
            ));
        }
        if self.body_size_pt == 0 || self.code_size_pt == 0 {
            return Err("template font sizes must be greater than 0".to_string());
        }
        if self.body_font.is_empty() || self.heading_font.is_empty() || self.code_font.is_empty() {
            return Err("template fonts must not be empty".to_string());
        }
        Ok(())
    }
}

/// Conversion behavior defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Whether to include a table of contents by default
    pub default_toc: bool,

    /// Default table of contents depth (1-6)
    pub default_toc_depth: u8,

    /// Whether to validate output DOCX files by default
    pub validate_output: bool,

    /// Whether to copy an existing output file to `<output>.bak` before
    /// overwriting it
    pub create_backup: bool,

    /// Whether to overwrite existing output files
    pub overwrite_existing: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_toc: false,
            default_toc_depth: 3,
            validate_output: false,
            create_backup: false,
            overwrite_existing: true,
        }
    }
}

impl ConversionConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=6).contains(&self.default_toc_depth) {
            return Err(format!(
                "conversion.default_toc_depth must be between 1 and 6, got {}",
                self.default_toc_depth
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log output format ("text" or "json")
    pub format: String,

    /// Optional log file path; when set, logs are also written there
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file_path: None,
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.format '{}'. Must be one of: {}",
                self.format,
                valid_formats.join(", ")
            ));
        }
        Ok(())
    }
}
