//! Per-call conversion request
//!
//! A [`ConversionRequest`] carries everything one conversion needs beyond the
//! resolved configuration: the input path, optional overrides for output
//! location, reference template, table of contents behavior and output
//! validation, plus verbatim extra Pandoc arguments. Unset overrides fall back
//! to the `[conversion]` section defaults at orchestration time.

use std::path::{Path, PathBuf};

/// Input and per-call overrides for a single Markdown to DOCX conversion
///
/// Constructed per call with the builder-style setters, consumed once by
/// [`Converter::convert`](crate::core::convert::Converter::convert).
///
/// # Examples
///
/// ```
/// use md2docx::domain::ConversionRequest;
///
/// let request = ConversionRequest::new("report.md")
///     .output("out/report.docx")
///     .toc(true)
///     .toc_depth(2)
///     .pandoc_arg("--number-sections");
/// assert_eq!(request.toc, Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Input Markdown file path
    pub input: PathBuf,

    /// Output DOCX path; defaults to the input path with a `.docx` extension
    pub output: Option<PathBuf>,

    /// Reference DOCX template overriding the converter-level template
    pub template: Option<PathBuf>,

    /// Table of contents override; `None` falls back to the configured default
    pub toc: Option<bool>,

    /// Table of contents depth override (valid range 1-6)
    pub toc_depth: Option<u8>,

    /// Extra Pandoc arguments, appended verbatim after all synthesized flags
    pub extra_args: Vec<String>,

    /// Output validation override; `None` falls back to the configured default
    pub validate_output: Option<bool>,
}

impl ConversionRequest {
    /// Creates a request for the given input file with no overrides set
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            template: None,
            toc: None,
            toc_depth: None,
            extra_args: Vec::new(),
            validate_output: None,
        }
    }

    /// Sets an explicit output path
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets a reference DOCX template for this call
    pub fn template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Overrides the table of contents default
    pub fn toc(mut self, toc: bool) -> Self {
        self.toc = Some(toc);
        self
    }

    /// Overrides the table of contents depth default
    pub fn toc_depth(mut self, depth: u8) -> Self {
        self.toc_depth = Some(depth);
        self
    }

    /// Appends one verbatim Pandoc argument
    pub fn pandoc_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Appends several verbatim Pandoc arguments
    pub fn pandoc_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Overrides the output validation default
    pub fn validate_output(mut self, validate: bool) -> Self {
        self.validate_output = Some(validate);
        self
    }

    /// The effective output path: the explicit override, or the input path
    /// with its extension replaced by `.docx`
    pub fn resolved_output(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.input.with_extension("docx"),
        }
    }

    /// The input path as a borrowed `Path`
    pub fn input(&self) -> &Path {
        &self.input
    }
}
