//! Business logic
//!
//! - [`convert`] - Conversion orchestration (validation, invocation, results)
//! - [`pandoc_args`] - Deterministic Pandoc argument synthesis
//! - [`template`] - Reference template derivation and rendering
//! - [`validate`] - Output DOCX structure validation

pub mod convert;
pub mod pandoc_args;
pub mod template;
pub mod validate;

pub use convert::Converter;
pub use pandoc_args::build_pandoc_args;
pub use template::TemplateBuilder;
pub use validate::validate_docx;
