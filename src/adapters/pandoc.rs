//! Pandoc invocation boundary
//!
//! The [`PandocRunner`] trait abstracts the external converter so the
//! orchestrator can be exercised against a stub in tests. The production
//! implementation, [`SystemPandoc`], spawns the `pandoc` binary through
//! `tokio::process` and enforces the configured timeout.
//!
//! An OS-level "executable not found" is translated to
//! [`Md2DocxError::PandocNotFound`]; every other invocation failure is wrapped
//! preserving the original cause. No retry happens at this boundary.

use crate::domain::errors::Md2DocxError;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Abstraction over the external Pandoc binary
#[async_trait]
pub trait PandocRunner: Send + Sync {
    /// Converts `input` to `output` with the given synthesized arguments
    ///
    /// Implementations append `input` and `-o output` to `args`; `args` is the
    /// ordered list produced by the argument synthesizer.
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        args: &[String],
        timeout: Duration,
    ) -> Result<()>;

    /// Returns the Pandoc version string, e.g. "3.1.11"
    async fn version(&self) -> Result<String>;
}

/// Production runner spawning the `pandoc` binary
#[derive(Debug, Clone)]
pub struct SystemPandoc {
    binary: PathBuf,
}

impl SystemPandoc {
    /// Creates a runner that resolves `pandoc` from PATH
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("pandoc"),
        }
    }

    /// Creates a runner for an explicit binary location
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for SystemPandoc {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PandocRunner for SystemPandoc {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        args: &[String],
        timeout: Duration,
    ) -> Result<()> {
        let mut command = Command::new(&self.binary);
        command
            .args(args)
            .arg(input)
            .arg("-o")
            .arg(output)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // An elapsed timeout drops the wait future; the child must not
            // outlive it.
            .kill_on_drop(true);

        tracing::debug!(
            binary = %self.binary.display(),
            args = ?args,
            input = %input.display(),
            output = %output.display(),
            "Invoking Pandoc"
        );

        let child = command.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Md2DocxError::PandocNotFound,
            _ => Md2DocxError::Conversion {
                input: input.to_path_buf(),
                message: format!("Failed to spawn Pandoc: {e}"),
            },
        })?;

        let outcome = tokio::time::timeout(timeout, child.wait_with_output()).await;

        match outcome {
            Err(_) => Err(Md2DocxError::Conversion {
                input: input.to_path_buf(),
                message: format!("Pandoc timed out after {} seconds", timeout.as_secs()),
            }),
            Ok(Err(e)) => Err(Md2DocxError::Conversion {
                input: input.to_path_buf(),
                message: format!("Pandoc invocation failed: {e}"),
            }),
            Ok(Ok(process_output)) if !process_output.status.success() => {
                let stderr = String::from_utf8_lossy(&process_output.stderr);
                Err(Md2DocxError::Conversion {
                    input: input.to_path_buf(),
                    message: format!(
                        "Pandoc exited with {}: {}",
                        process_output.status,
                        stderr.trim()
                    ),
                })
            }
            Ok(Ok(_)) => Ok(()),
        }
    }

    async fn version(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Md2DocxError::PandocNotFound,
                _ => Md2DocxError::Pandoc(format!("Failed to query Pandoc version: {e}")),
            })?;

        if !output.status.success() {
            return Err(Md2DocxError::Pandoc(format!(
                "pandoc --version exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_version_output(&stdout).ok_or_else(|| {
            Md2DocxError::Pandoc("Could not parse Pandoc version output".to_string())
        })
    }
}

/// Extracts the version token from `pandoc --version` output
///
/// The first line looks like `pandoc 3.1.11`; the second whitespace-separated
/// token is the version.
pub fn parse_version_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}

/// Compares dotted version strings component-wise
///
/// Missing or non-numeric components count as zero, so "3" >= "2.19" and
/// "2.19.2" >= "2.19".
pub fn version_is_at_least(version: &str, minimum: &str) -> bool {
    let parse = |s: &str| -> Vec<u64> {
        s.split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };
    let have = parse(version);
    let want = parse(minimum);
    let len = have.len().max(want.len());

    for i in 0..len {
        let h = have.get(i).copied().unwrap_or(0);
        let w = want.get(i).copied().unwrap_or(0);
        if h != w {
            return h > w;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_output() {
        let stdout = "pandoc 3.1.11\nFeatures: +server +lua\n";
        assert_eq!(parse_version_output(stdout), Some("3.1.11".to_string()));
    }

    #[test]
    fn test_parse_version_output_short() {
        assert_eq!(parse_version_output("pandoc 2.19"), Some("2.19".to_string()));
        assert_eq!(parse_version_output(""), None);
        assert_eq!(parse_version_output("pandoc"), None);
    }

    #[test]
    fn test_version_comparison() {
        assert!(version_is_at_least("2.19", "2.19"));
        assert!(version_is_at_least("2.19.2", "2.19"));
        assert!(version_is_at_least("3.0", "2.19"));
        assert!(!version_is_at_least("2.18.0", "2.19"));
        assert!(!version_is_at_least("1.9", "2.19"));
    }

    #[test]
    fn test_version_comparison_tolerates_garbage() {
        // Non-numeric components count as zero rather than panicking
        assert!(version_is_at_least("3.x", "3.0"));
        assert!(!version_is_at_least("x.1", "2.19"));
    }

    #[tokio::test]
    async fn test_missing_binary_maps_to_not_found() {
        let runner = SystemPandoc::with_binary("definitely-not-a-real-pandoc-binary");
        let err = runner.version().await.unwrap_err();
        assert!(matches!(err, Md2DocxError::PandocNotFound));
    }
}
