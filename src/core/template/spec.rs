//! Reference template derivation
//!
//! A [`TemplateSpec`] is the deterministic style table derived from a
//! [`TemplateConfig`]: page geometry plus an ordered registry of paragraph
//! styles (`Normal`, `Heading 1`..`Heading 6`, `Code Block`). The registry is
//! populated through an explicit upsert keyed by style id, so a name that
//! already exists is mutated rather than duplicated.
//!
//! Derivation is pure: the same config always yields a field-for-field equal
//! spec. Rendering to an actual DOCX happens in the builder.

use crate::config::schema::{PageSize, TemplateConfig};
use indexmap::IndexMap;

/// Twentieths of a point per centimeter
const TWIPS_PER_CM: f64 = 566.929;

/// Fixed page dimension table in twips, keyed by page size
///
/// A4 is 21.0 x 29.7 cm; Letter is 8.5 x 11.0 in. Hard-coded, not derived.
pub const fn page_dimensions(size: PageSize) -> (u32, u32) {
    match size {
        PageSize::A4 => (11906, 16838),
        PageSize::Letter => (12240, 15840),
    }
}

/// Converts centimeters to twips, rounding to the nearest unit
pub fn cm_to_twips(cm: f64) -> i32 {
    (cm * TWIPS_PER_CM).round() as i32
}

/// Converts points to twips
pub fn pt_to_twips(pt: u32) -> u32 {
    pt * 20
}

/// Page geometry for the reference template
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    /// Page width in twips
    pub width: u32,
    /// Page height in twips
    pub height: u32,
    /// Margin in twips, applied to all four sides
    pub margin: i32,
}

/// One paragraph style in the template
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpec {
    /// Style id used inside the archive (no spaces, e.g. "Heading1")
    pub id: String,
    /// Display name recognized by Word and Pandoc (e.g. "heading 1")
    pub name: String,
    /// Font family
    pub font: String,
    /// Font size in points
    pub size_pt: u32,
    /// Bold flag
    pub bold: bool,
    /// Paragraph space before, in points
    pub space_before_pt: u32,
    /// Paragraph space after, in points
    pub space_after_pt: u32,
    /// Keep the paragraph on the same page as the next one
    pub keep_with_next: bool,
    /// Optional left indent in centimeters
    pub left_indent_cm: Option<f64>,
    /// Optional line spacing multiplier (1.0 = single)
    pub line_spacing: Option<f64>,
}

/// Deterministic style table for one reference template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpec {
    /// Page geometry
    pub page: PageGeometry,
    /// Ordered style registry keyed by style id
    pub styles: IndexMap<String, StyleSpec>,
}

/// Per-level heading table: (size pt, bold, space before pt, space after pt)
///
/// Level 1 is largest, sizes decrease monotonically, levels 5-6 are not bold.
const HEADING_LEVELS: [(u32, bool, u32, u32); 6] = [
    (18, true, 12, 6),
    (16, true, 10, 4),
    (14, true, 8, 3),
    (12, true, 6, 3),
    (11, false, 6, 3),
    (11, false, 6, 3),
];

impl TemplateSpec {
    /// Derives the style table from a template configuration
    pub fn from_config(config: &TemplateConfig) -> Self {
        let (width, height) = page_dimensions(config.page_size);
        let mut spec = Self {
            page: PageGeometry {
                width,
                height,
                margin: cm_to_twips(config.margin_cm),
            },
            styles: IndexMap::new(),
        };

        spec.upsert(StyleSpec {
            id: "Normal".to_string(),
            name: "Normal".to_string(),
            font: config.body_font.clone(),
            size_pt: config.body_size_pt,
            bold: false,
            space_before_pt: 0,
            space_after_pt: 6,
            keep_with_next: false,
            left_indent_cm: None,
            line_spacing: Some(1.15),
        });

        for (level, (size_pt, bold, before, after)) in HEADING_LEVELS.iter().enumerate() {
            let level = level + 1;
            spec.upsert(StyleSpec {
                id: format!("Heading{level}"),
                name: format!("heading {level}"),
                font: config.heading_font.clone(),
                size_pt: *size_pt,
                bold: *bold,
                space_before_pt: *before,
                space_after_pt: *after,
                // A heading is never orphaned from its following paragraph
                keep_with_next: true,
                left_indent_cm: None,
                line_spacing: None,
            });
        }

        spec.upsert(StyleSpec {
            id: "CodeBlock".to_string(),
            name: "Code Block".to_string(),
            font: config.code_font.clone(),
            size_pt: config.code_size_pt,
            bold: false,
            space_before_pt: 6,
            space_after_pt: 6,
            keep_with_next: false,
            left_indent_cm: Some(0.75),
            line_spacing: None,
        });

        spec
    }

    /// Inserts the style, or replaces an existing entry with the same id
    ///
    /// Lookup-then-branch against the registry; never produces duplicates.
    pub fn upsert(&mut self, style: StyleSpec) {
        match self.styles.get_mut(&style.id) {
            Some(existing) => *existing = style,
            None => {
                self.styles.insert(style.id.clone(), style);
            }
        }
    }

    /// Looks up a style by id
    pub fn style(&self, id: &str) -> Option<&StyleSpec> {
        self.styles.get(id)
    }
}
