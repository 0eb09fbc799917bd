//! Conversion orchestration
//!
//! The [`Converter`] sequences one conversion: input validation, effective
//! settings resolution, argument synthesis, the external Pandoc call, and
//! optional output validation. Configuration and argument errors fail before
//! any external invocation; a failed Pandoc call surfaces immediately, once,
//! with no retry.

use crate::adapters::pandoc::{version_is_at_least, PandocRunner, SystemPandoc};
use crate::config::schema::Md2DocxConfig;
use crate::core::pandoc_args::build_pandoc_args;
use crate::core::validate::validate_docx;
use crate::domain::errors::Md2DocxError;
use crate::domain::request::ConversionRequest;
use crate::domain::result::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Markdown to DOCX converter
///
/// Holds the resolved configuration, an optional converter-level reference
/// template, and the Pandoc runner. Construct once, then call
/// [`convert`](Self::convert) per document; each call consumes its own
/// [`ConversionRequest`] and shares no mutable state with other calls.
///
/// # Examples
///
/// ```no_run
/// use md2docx::config::load_config;
/// use md2docx::core::convert::Converter;
/// use md2docx::domain::ConversionRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let converter = Converter::new(load_config(None)?);
/// let output = converter
///     .convert(&ConversionRequest::new("report.md").toc(true))
///     .await?;
/// println!("Created {}", output.display());
/// # Ok(())
/// # }
/// ```
pub struct Converter {
    config: Md2DocxConfig,
    reference_doc: Option<PathBuf>,
    runner: Arc<dyn PandocRunner>,
}

impl Converter {
    /// Creates a converter using the system Pandoc binary
    pub fn new(config: Md2DocxConfig) -> Self {
        Self::with_runner(config, Arc::new(SystemPandoc::new()))
    }

    /// Creates a converter with an explicit runner (the test seam)
    pub fn with_runner(config: Md2DocxConfig, runner: Arc<dyn PandocRunner>) -> Self {
        Self {
            config,
            reference_doc: None,
            runner,
        }
    }

    /// Sets a converter-level reference template used when a request does not
    /// carry its own
    pub fn reference_doc(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_doc = Some(path.into());
        self
    }

    /// The resolved configuration this converter operates with
    pub fn config(&self) -> &Md2DocxConfig {
        &self.config
    }

    /// Converts one Markdown file to DOCX
    ///
    /// Unset request overrides fall back to the `[conversion]` defaults. The
    /// output path defaults to the input path with a `.docx` extension;
    /// missing parent directories are created.
    ///
    /// # Errors
    ///
    /// - `InputNotFound` / `InputNotAFile` when the input path is invalid
    /// - `TocDepthOutOfRange` before any external invocation
    /// - `OutputConflict` when the output exists and overwriting is disabled
    /// - `PandocNotFound` / `Conversion` from the invocation boundary
    /// - `Validation` when requested and the produced file is suspect
    pub async fn convert(&self, request: &ConversionRequest) -> Result<PathBuf> {
        let input = request.input();
        if !input.exists() {
            return Err(Md2DocxError::InputNotFound(input.to_path_buf()));
        }
        if !input.is_file() {
            return Err(Md2DocxError::InputNotAFile(input.to_path_buf()));
        }

        let conversion = &self.config.conversion;
        let toc = request.toc.unwrap_or(conversion.default_toc);
        let toc_depth = request.toc_depth.unwrap_or(conversion.default_toc_depth);
        let validate = request
            .validate_output
            .unwrap_or(conversion.validate_output);

        if !(1..=6).contains(&toc_depth) {
            return Err(Md2DocxError::TocDepthOutOfRange(i64::from(toc_depth)));
        }

        let output = request.resolved_output();
        self.prepare_output_path(&output)?;

        let reference_doc = request
            .template
            .clone()
            .or_else(|| self.reference_doc.clone());

        let args = build_pandoc_args(
            &self.config.pandoc,
            reference_doc.as_deref(),
            toc,
            toc_depth,
            &request.extra_args,
        );

        self.check_pandoc_version().await?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            toc,
            "Starting conversion"
        );

        let timeout = Duration::from_secs(self.config.pandoc.timeout_seconds);
        self.runner.convert(input, &output, &args, timeout).await?;

        if validate {
            validate_docx(&output)?;
        }

        tracing::info!(output = %output.display(), "Conversion completed");
        Ok(output)
    }

    /// Converts using an explicitly required reference template
    ///
    /// Unlike the optional reference document on [`convert`], the template
    /// must exist; a missing one fails with `InputNotFound`.
    pub async fn convert_with_template(
        &self,
        input: impl Into<PathBuf>,
        template: impl Into<PathBuf>,
    ) -> Result<PathBuf> {
        let template = template.into();
        if !template.exists() {
            return Err(Md2DocxError::InputNotFound(template));
        }

        let request = ConversionRequest::new(input.into()).template(template);
        self.convert(&request).await
    }

    /// Queries the Pandoc version through the runner
    pub async fn pandoc_version(&self) -> Result<String> {
        self.runner.version().await
    }

    /// Creates parent directories and resolves overwrite semantics
    fn prepare_output_path(&self, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if output.exists() {
            if !self.config.conversion.overwrite_existing {
                return Err(Md2DocxError::OutputConflict(output.to_path_buf()));
            }
            if self.config.conversion.create_backup {
                let backup = backup_path(output);
                fs::copy(output, &backup)?;
                tracing::debug!(
                    output = %output.display(),
                    backup = %backup.display(),
                    "Backed up existing output"
                );
            }
        }

        Ok(())
    }

    /// Warns when the installed Pandoc is older than the configured minimum
    async fn check_pandoc_version(&self) -> Result<()> {
        let version = self.runner.version().await.map_err(|e| match e {
            Md2DocxError::PandocNotFound => Md2DocxError::PandocNotFound,
            other => Md2DocxError::Pandoc(format!("Failed to validate Pandoc installation: {other}")),
        })?;

        let minimum = &self.config.pandoc.min_version;
        if !version_is_at_least(&version, minimum) {
            tracing::warn!(
                installed = %version,
                minimum = %minimum,
                "Pandoc is older than recommended, recommend >= {minimum}"
            );
        }

        Ok(())
    }
}

fn backup_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
