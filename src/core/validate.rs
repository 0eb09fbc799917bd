//! Output DOCX validation
//!
//! A produced DOCX is a ZIP container holding named OOXML parts. Validation
//! opens the archive and checks the members Pandoc must have written. All
//! applicable checks run and their failures accumulate before raising, so the
//! caller gets a complete diagnostic in one pass instead of the first problem
//! only.

use crate::domain::errors::Md2DocxError;
use crate::domain::result::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Internal members every valid output archive must contain
pub const REQUIRED_MEMBERS: [&str; 3] = ["[Content_Types].xml", "_rels/.rels", "word/document.xml"];

/// Main document body member
const DOCUMENT_MEMBER: &str = "word/document.xml";

/// Validates a produced DOCX file
///
/// Checks, in order, accumulating problems: the file exists, it is non-empty,
/// it opens as a ZIP archive, every required member is present, and the main
/// document body can be read back out.
///
/// # Errors
///
/// Returns [`Md2DocxError::Validation`] carrying every detected problem.
pub fn validate_docx(path: &Path) -> Result<()> {
    let mut problems = Vec::new();

    if !path.exists() {
        return Err(Md2DocxError::Validation {
            output: path.to_path_buf(),
            problems: vec!["output file was not created".to_string()],
        });
    }

    match std::fs::metadata(path) {
        Ok(metadata) if metadata.len() == 0 => {
            problems.push("output file is empty".to_string());
        }
        Ok(_) => {}
        Err(e) => problems.push(format!("could not stat output file: {e}")),
    }

    match File::open(path).map_err(zip::result::ZipError::Io).and_then(ZipArchive::new) {
        Ok(mut archive) => {
            for member in REQUIRED_MEMBERS {
                if archive.by_name(member).is_err() {
                    problems.push(format!("missing required archive member: {member}"));
                } else if member == DOCUMENT_MEMBER {
                    // Present: the body must also be readable
                    let mut contents = String::new();
                    if let Ok(mut entry) = archive.by_name(DOCUMENT_MEMBER) {
                        if entry.read_to_string(&mut contents).is_err() {
                            problems.push(format!("could not read {DOCUMENT_MEMBER}"));
                        }
                    }
                }
            }
        }
        Err(e) => {
            problems.push(format!("not a valid DOCX archive: {e}"));
        }
    }

    if problems.is_empty() {
        tracing::debug!(output = %path.display(), "DOCX validation passed");
        Ok(())
    } else {
        Err(Md2DocxError::Validation {
            output: path.to_path_buf(),
            problems,
        })
    }
}
