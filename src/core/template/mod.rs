//! Reference template construction
//!
//! Derives a deterministic style table from the `[template]` configuration
//! ([`spec`]) and renders it into a reference DOCX consumed by Pandoc's
//! `--reference-doc` mechanism ([`builder`]).

pub mod builder;
pub mod spec;

pub use builder::TemplateBuilder;
pub use spec::{PageGeometry, StyleSpec, TemplateSpec};
