//! Pandoc argument synthesis
//!
//! Translates resolved configuration plus per-call overrides into the exact
//! ordered argument list handed to Pandoc. The ordering is deterministic and
//! load-bearing for golden-output tests:
//!
//! 1. reader format (`-f`)
//! 2. writer format (`-t`)
//! 3. optional `--reference-doc`
//! 4. optional `--toc` and `--toc-depth`
//! 5. caller-supplied extras, verbatim
//!
//! Caller extras are appended unvalidated and never deduplicated against the
//! synthesized flags; a caller who passes a conflicting flag owns the result.

use crate::config::schema::PandocConfig;
use std::path::Path;

/// Builds the ordered Pandoc argument list
///
/// A reference document that does not exist on disk is logged and skipped
/// rather than failing the conversion. `toc_depth` must already be validated
/// to lie in [1,6] by the caller; this function does not clamp.
pub fn build_pandoc_args(
    pandoc: &PandocConfig,
    reference_doc: Option<&Path>,
    toc: bool,
    toc_depth: u8,
    extra_args: &[String],
) -> Vec<String> {
    let mut args = vec![
        "-f".to_string(),
        pandoc.reader_format.clone(),
        "-t".to_string(),
        pandoc.writer_format.clone(),
    ];

    if let Some(reference) = reference_doc {
        if reference.exists() {
            args.push("--reference-doc".to_string());
            args.push(reference.display().to_string());
        } else {
            tracing::warn!(
                reference_doc = %reference.display(),
                "Reference document not found, converting without it"
            );
        }
    }

    if toc {
        args.push("--toc".to_string());
        args.push("--toc-depth".to_string());
        args.push(toc_depth.to_string());
    }

    args.extend(extra_args.iter().cloned());

    args
}
