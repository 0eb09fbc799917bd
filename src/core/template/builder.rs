//! Reference template rendering
//!
//! Renders a [`TemplateSpec`] into an actual DOCX file through `docx-rs`:
//! page geometry, the paragraph style table, optional sample content, and a
//! best-effort compatibility hint patched into `word/settings.xml` after the
//! archive is packed. The hint step returns a `Result` that the builder
//! deliberately discards; a template without it is still fully usable.

use crate::config::schema::TemplateConfig;
use crate::core::template::spec::{cm_to_twips, pt_to_twips, StyleSpec, TemplateSpec};
use crate::domain::errors::Md2DocxError;
use crate::domain::result::Result;
use docx_rs::{
    Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Word generation hinted in the template settings (Word 2016/2019+)
const COMPAT_MODE: &str = "16";

/// Builds reference DOCX templates from a style configuration
///
/// # Examples
///
/// ```no_run
/// use md2docx::config::TemplateConfig;
/// use md2docx::core::template::TemplateBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let builder = TemplateBuilder::new(&TemplateConfig::default());
/// builder.create("reference.docx", true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    spec: TemplateSpec,
}

impl TemplateBuilder {
    /// Derives the style table from the configuration
    pub fn new(config: &TemplateConfig) -> Self {
        Self {
            spec: TemplateSpec::from_config(config),
        }
    }

    /// Wraps an already-derived style table
    pub fn from_spec(spec: TemplateSpec) -> Self {
        Self { spec }
    }

    /// The derived style table
    pub fn spec(&self) -> &TemplateSpec {
        &self.spec
    }

    /// Creates the reference template on disk
    ///
    /// `include_sample` appends one paragraph per heading level and a
    /// code-styled paragraph so the styles can be previewed; it has no effect
    /// on downstream conversion correctness.
    ///
    /// # Errors
    ///
    /// Returns a `Template` error when packing fails, or an `Io` error when
    /// the file cannot be written. A failed compatibility hint never fails
    /// the call.
    pub fn create(&self, output_path: impl AsRef<Path>, include_sample: bool) -> Result<PathBuf> {
        let output_path = output_path.as_ref();

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let docx = self.render(include_sample);

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Md2DocxError::Template(format!("Failed to pack DOCX: {e}")))?;

        // Best-effort: the hint is cosmetic and its failure is discarded
        let buffer = match apply_compatibility_hint(&buffer, COMPAT_MODE) {
            Ok(patched) => patched,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping compatibility hint");
                buffer
            }
        };

        fs::write(output_path, &buffer)?;

        tracing::info!(
            template = %output_path.display(),
            styles = self.spec.styles.len(),
            "Reference template created"
        );

        Ok(output_path.to_path_buf())
    }

    fn render(&self, include_sample: bool) -> Docx {
        let mut docx = Docx::new()
            .page_size(self.spec.page.width, self.spec.page.height)
            .page_margin(
                PageMargin::new()
                    .top(self.spec.page.margin)
                    .bottom(self.spec.page.margin)
                    .left(self.spec.page.margin)
                    .right(self.spec.page.margin),
            );

        for style in self.spec.styles.values() {
            docx = docx.add_style(render_style(style));
        }

        if include_sample {
            docx = add_sample_content(docx);
        }

        docx
    }
}

fn render_style(spec: &StyleSpec) -> Style {
    let fonts = RunFonts::new()
        .ascii(&spec.font)
        .hi_ansi(&spec.font)
        .east_asia(&spec.font)
        .cs(&spec.font);

    let mut style = Style::new(&spec.id, StyleType::Paragraph)
        .name(&spec.name)
        .fonts(fonts)
        .size((spec.size_pt * 2) as usize);

    if spec.bold {
        style = style.bold();
    }

    let mut spacing = LineSpacing::new()
        .before(pt_to_twips(spec.space_before_pt))
        .after(pt_to_twips(spec.space_after_pt));
    if let Some(multiplier) = spec.line_spacing {
        // 240 twips per line at single spacing
        spacing = spacing
            .line((multiplier * 240.0).round() as i32)
            .line_rule(LineSpacingType::Auto);
    }
    style.paragraph_property = style.paragraph_property.line_spacing(spacing);

    if let Some(indent_cm) = spec.left_indent_cm {
        style = style.indent(Some(cm_to_twips(indent_cm)), None, None, None);
    }

    if spec.keep_with_next {
        style.paragraph_property = style.paragraph_property.keep_next(true);
    }

    style
}

fn add_sample_content(mut docx: Docx) -> Docx {
    for level in 1..=6 {
        docx = docx
            .add_paragraph(
                Paragraph::new()
                    .style(&format!("Heading{level}"))
                    .add_run(Run::new().add_text(format!("Heading {level}"))),
            )
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(format!(
                "Body text under heading level {level}. Replace or remove this sample content."
            ))));
    }

    docx.add_paragraph(
        Paragraph::new().add_run(Run::new().add_text("Sample code paragraph:")),
    )
    .add_paragraph(
        Paragraph::new()
            .style("CodeBlock")
            .add_run(Run::new().add_text("for i in 0..3 { println!(\"{i}\"); }")),
    )
}

/// Rewrites the packed archive with a compatibility hint in `word/settings.xml`
///
/// Find-or-create of the `w:compat` element and its `compatibilityMode`
/// setting. The caller discards the error variant by design.
fn apply_compatibility_hint(bytes: &[u8], mode: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Md2DocxError::Template(format!("Packed template is not readable: {e}")))?;

    let mut out_buffer = Vec::new();
    let mut patched = false;
    {
        let mut writer = ZipWriter::new(Cursor::new(&mut out_buffer));
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| Md2DocxError::Template(e.to_string()))?;
            let name = entry.name().to_string();
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents)?;

            if name == "word/settings.xml" {
                let xml = String::from_utf8_lossy(&contents);
                if let Some(updated) = patch_settings_xml(&xml, mode) {
                    contents = updated.into_bytes();
                    patched = true;
                }
            }

            writer
                .start_file(name, SimpleFileOptions::default())
                .map_err(|e| Md2DocxError::Template(e.to_string()))?;
            writer.write_all(&contents)?;
        }
        writer
            .finish()
            .map_err(|e| Md2DocxError::Template(e.to_string()))?;
    }

    if patched {
        Ok(out_buffer)
    } else {
        Err(Md2DocxError::Template(
            "settings part not found in packed template".to_string(),
        ))
    }
}

fn patch_settings_xml(xml: &str, mode: &str) -> Option<String> {
    let setting = format!(
        r#"<w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="{mode}"/>"#
    );

    // Update an existing compatibilityMode entry in place
    if let Some(name_pos) = xml.find(r#"w:name="compatibilityMode""#) {
        let start = xml[..name_pos].rfind("<w:compatSetting")?;
        let end = name_pos + xml[name_pos..].find("/>")? + 2;
        let mut out = String::with_capacity(xml.len() + setting.len());
        out.push_str(&xml[..start]);
        out.push_str(&setting);
        out.push_str(&xml[end..]);
        return Some(out);
    }

    // An existing compat element gains the setting
    if let Some(compat_pos) = xml.find("<w:compat>") {
        let insert_at = compat_pos + "<w:compat>".len();
        let mut out = String::with_capacity(xml.len() + setting.len());
        out.push_str(&xml[..insert_at]);
        out.push_str(&setting);
        out.push_str(&xml[insert_at..]);
        return Some(out);
    }
    if let Some(compat_pos) = xml.find("<w:compat/>") {
        let end = compat_pos + "<w:compat/>".len();
        let mut out = String::with_capacity(xml.len() + setting.len());
        out.push_str(&xml[..compat_pos]);
        out.push_str("<w:compat>");
        out.push_str(&setting);
        out.push_str("</w:compat>");
        out.push_str(&xml[end..]);
        return Some(out);
    }

    // No compat element yet: create one just before the closing tag
    let close = xml.rfind("</w:settings>")?;
    let mut out = String::with_capacity(xml.len() + setting.len() + 24);
    out.push_str(&xml[..close]);
    out.push_str("<w:compat>");
    out.push_str(&setting);
    out.push_str("</w:compat>");
    out.push_str(&xml[close..]);
    Some(out)
}
