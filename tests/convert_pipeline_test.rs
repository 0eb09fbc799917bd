//! End-to-end pipeline tests with a stub Pandoc runner
//!
//! The stub records every invocation so argument synthesis and the
//! no-invocation-on-error guarantees can be asserted without Pandoc
//! installed.

use async_trait::async_trait;
use md2docx::adapters::pandoc::PandocRunner;
use md2docx::config::Md2DocxConfig;
use md2docx::core::convert::Converter;
use md2docx::core::template::TemplateBuilder;
use md2docx::core::validate::validate_docx;
use md2docx::domain::{ConversionRequest, Md2DocxError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Stub runner that records calls and writes a minimal valid archive
struct RecordingPandoc {
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingPandoc {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn last_args(&self) -> Vec<String> {
        self.calls.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl PandocRunner for RecordingPandoc {
    async fn convert(
        &self,
        _input: &Path,
        output: &Path,
        args: &[String],
        _timeout: Duration,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(args.to_vec());

        let file = fs::File::create(output)?;
        let mut writer = ZipWriter::new(file);
        for member in ["[Content_Types].xml", "_rels/.rels", "word/document.xml"] {
            writer
                .start_file(member, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<xml/>").unwrap();
        }
        writer.finish().unwrap();
        Ok(())
    }

    async fn version(&self) -> Result<String> {
        Ok("3.1.11".to_string())
    }
}

fn write_two_heading_markdown(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("doc.md");
    fs::write(
        &path,
        "# Introduction\n\nSome text.\n\n## Details\n\nMore text.\n",
    )
    .unwrap();
    path
}

#[tokio::test]
async fn test_toc_depth_appears_as_standalone_token() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(Md2DocxConfig::default(), runner.clone());

    converter
        .convert(&ConversionRequest::new(&input).toc(true).toc_depth(2))
        .await
        .unwrap();

    let args = runner.last_args();
    let toc_idx = args.iter().position(|a| a == "--toc").unwrap();
    assert_eq!(args[toc_idx + 1], "--toc-depth");
    assert_eq!(args[toc_idx + 2], "2");
}

#[tokio::test]
async fn test_no_toc_flags_when_disabled() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(Md2DocxConfig::default(), runner.clone());

    converter
        .convert(&ConversionRequest::new(&input).toc(false))
        .await
        .unwrap();

    let args = runner.last_args();
    assert!(!args.contains(&"--toc".to_string()));
    assert!(!args.contains(&"--toc-depth".to_string()));
}

#[tokio::test]
async fn test_format_flags_precede_optional_flags_and_extras() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(Md2DocxConfig::default(), runner.clone());

    converter
        .convert(
            &ConversionRequest::new(&input)
                .toc(true)
                .toc_depth(3)
                .pandoc_arg("--number-sections"),
        )
        .await
        .unwrap();

    let args = runner.last_args();
    let reader_idx = args.iter().position(|a| a == "-f").unwrap();
    let writer_idx = args.iter().position(|a| a == "-t").unwrap();
    let toc_idx = args.iter().position(|a| a == "--toc").unwrap();
    let extra_idx = args.iter().position(|a| a == "--number-sections").unwrap();

    assert!(reader_idx < writer_idx);
    assert!(writer_idx < toc_idx);
    assert!(toc_idx < extra_idx);
    assert_eq!(extra_idx, args.len() - 1);
}

#[tokio::test]
async fn test_out_of_range_depth_never_invokes_pandoc() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(Md2DocxConfig::default(), runner.clone());

    let err = converter
        .convert(&ConversionRequest::new(&input).toc(true).toc_depth(7))
        .await
        .unwrap_err();

    assert!(matches!(err, Md2DocxError::TocDepthOutOfRange(7)));
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_generated_template_feeds_conversion() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let template_path = dir.path().join("reference.docx");

    let config = Md2DocxConfig::default();
    TemplateBuilder::new(&config.template)
        .create(&template_path, false)
        .unwrap();

    // The generated template is itself a structurally valid DOCX
    validate_docx(&template_path).unwrap();

    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(config, runner.clone());
    converter
        .convert(&ConversionRequest::new(&input).template(&template_path))
        .await
        .unwrap();

    let args = runner.last_args();
    let ref_idx = args.iter().position(|a| a == "--reference-doc").unwrap();
    assert_eq!(args[ref_idx + 1], template_path.display().to_string());
}

#[tokio::test]
async fn test_missing_template_converts_without_reference() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(Md2DocxConfig::default(), runner.clone());

    let output = converter
        .convert(&ConversionRequest::new(&input).template(dir.path().join("gone.docx")))
        .await
        .unwrap();

    assert!(output.exists());
    assert!(!runner.last_args().contains(&"--reference-doc".to_string()));
}

#[tokio::test]
async fn test_produced_output_passes_validation() {
    let dir = TempDir::new().unwrap();
    let input = write_two_heading_markdown(&dir);
    let runner = RecordingPandoc::new();
    let converter = Converter::with_runner(Md2DocxConfig::default(), runner.clone());

    let output = converter
        .convert(&ConversionRequest::new(&input).validate_output(true))
        .await
        .unwrap();

    // Re-running the validator directly confirms the same result
    validate_docx(&output).unwrap();
}
