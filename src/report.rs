//! Report Builder: serializes a completed session into a PDF document.
//!
//! Two stages: `layout` validates the demographics and produces the ordered
//! blocks (title, metadata, symptoms, suggestions); the PDF stage draws those
//! blocks with `printpdf`. Output depends only on the arguments, so identical
//! input and `generated_at` give byte-identical documents.

use std::io::BufWriter;

use chrono::NaiveDateTime;
use printpdf::lopdf;
use printpdf::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::{ReportConfig, DATE_FORMAT, MAX_AGE, MIN_AGE, REPORT_TITLE};
use crate::error::RenderError;
use crate::models::session::SessionInput;

pub const SYMPTOMS_HEADER: &str = "Symptoms Selected:";
pub const SUGGESTIONS_HEADER: &str = "Suggestions:";
pub const ITEM_MARKER: &str = "- ";

/// Millimetres per PostScript point.
const MM_PER_PT: f32 = 0.3528;

// ─── Layout ──────────────────────────────────────────────────────────────────

/// One drawable unit of the report, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ReportBlock {
    /// Bold, large, centred.
    Title(String),
    /// Single body line.
    Line(String),
    /// Body text wrapped over as many lines as needed.
    Paragraph(String),
    /// Vertical space between sections.
    Gap,
}

/// Checks the demographic fields before anything is drawn.
pub fn validate(input: &SessionInput) -> Result<(), RenderError> {
    if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
        return Err(RenderError::InvalidField {
            field: "age",
            reason: format!("{} is outside {MIN_AGE}..={MAX_AGE}", input.age),
        });
    }
    Ok(())
}

/// Validates `input` and lays out the report sections in their fixed order.
pub fn layout(
    input: &SessionInput,
    suggestions: &[String],
    generated_at: NaiveDateTime,
) -> Result<Vec<ReportBlock>, RenderError> {
    validate(input)?;

    let mut blocks = vec![
        ReportBlock::Title(REPORT_TITLE.into()),
        ReportBlock::Gap,
        ReportBlock::Line(format!("Date: {}", generated_at.format(DATE_FORMAT))),
        ReportBlock::Line(format!("Age: {}", input.age)),
        ReportBlock::Line(format!("Gender: {}", input.gender)),
        ReportBlock::Gap,
        ReportBlock::Line(SYMPTOMS_HEADER.into()),
    ];
    blocks.extend(
        input
            .symptoms
            .iter()
            .map(|s| ReportBlock::Line(format!("{ITEM_MARKER}{s}"))),
    );
    blocks.push(ReportBlock::Gap);
    blocks.push(ReportBlock::Line(SUGGESTIONS_HEADER.into()));
    blocks.extend(suggestions.iter().map(|s| ReportBlock::Paragraph(with_marker(s))));

    Ok(blocks)
}

/// Suggestions normally carry the marker already; add it when they don't.
fn with_marker(text: &str) -> String {
    if text.starts_with(ITEM_MARKER) {
        text.to_string()
    } else {
        format!("{ITEM_MARKER}{text}")
    }
}

/// Plain-text rendering of the blocks, one line per block.
pub fn to_text(blocks: &[ReportBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            ReportBlock::Title(t) | ReportBlock::Line(t) | ReportBlock::Paragraph(t) => {
                out.push_str(t)
            }
            ReportBlock::Gap => {}
        }
        out.push('\n');
    }
    out
}

// ─── PDF ─────────────────────────────────────────────────────────────────────

/// Builds the report with the default A4 layout. Returns PDF bytes.
pub fn build(
    input: &SessionInput,
    suggestions: &[String],
    generated_at: NaiveDateTime,
) -> Result<Vec<u8>, RenderError> {
    build_with_config(input, suggestions, generated_at, &ReportConfig::default())
}

/// Builds the report with explicit page geometry and fonts. Returns PDF bytes.
pub fn build_with_config(
    input: &SessionInput,
    suggestions: &[String],
    generated_at: NaiveDateTime,
    config: &ReportConfig,
) -> Result<Vec<u8>, RenderError> {
    let blocks = layout(input, suggestions, generated_at)?;
    render_pdf(&blocks, generated_at, config)
}

/// Draws laid-out blocks into a PDF. Pages are added as the cursor runs out.
pub fn render_pdf(
    blocks: &[ReportBlock],
    generated_at: NaiveDateTime,
    config: &ReportConfig,
) -> Result<Vec<u8>, RenderError> {
    if config.unicode_font.is_none() {
        check_builtin_coverage(blocks)?;
    }

    let timestamp =
        ::time::OffsetDateTime::from_unix_timestamp(generated_at.and_utc().timestamp())
            .map_err(|e| RenderError::Pdf(format!("timestamp out of range: {e}")))?;

    let (doc, page1, layer1) = PdfDocument::new(
        REPORT_TITLE,
        Mm(config.page_width_mm),
        Mm(config.page_height_mm),
        "Layer 1",
    );
    // No XMP packet: it would embed another random instance id.
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(timestamp)
        .with_mod_date(timestamp)
        .with_metadata_date(timestamp);

    let (font, bold) = match &config.unicode_font {
        Some(bytes) => {
            let f = doc
                .add_external_font(bytes.as_slice())
                .map_err(|e| RenderError::Pdf(format!("font error: {e}")))?;
            (f.clone(), f)
        }
        None => (
            doc.add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Pdf(format!("font error: {e}")))?,
            doc.add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Pdf(format!("font error: {e}")))?,
        ),
    };

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page1).get_layer(layer1),
        config,
        y: config.page_height_mm - config.margin_mm,
    };

    for block in blocks {
        match block {
            ReportBlock::Title(text) => {
                cursor.reserve(config.line_height_mm);
                let x = centred_x(text, config.title_size, config);
                cursor.write(text, config.title_size, x, &bold);
            }
            ReportBlock::Line(text) => {
                cursor.reserve(config.line_height_mm);
                cursor.write(text, config.body_size, config.margin_mm, &font);
            }
            ReportBlock::Paragraph(text) => {
                for line in wrap_text(text, config.wrap_chars) {
                    cursor.reserve(config.line_height_mm);
                    cursor.write(&line, config.body_size, config.margin_mm, &font);
                }
            }
            ReportBlock::Gap => cursor.y -= config.section_gap_mm,
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Pdf(format!("save error: {e}")))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| RenderError::Pdf(format!("buffer error: {e}")))?;

    stamp_trailer_id(&bytes, &document_id(blocks, generated_at))
}

/// Replaces the random trailer `/ID` pair written by `save` with `id`.
fn stamp_trailer_id(bytes: &[u8], id: &str) -> Result<Vec<u8>, RenderError> {
    let mut pdf = lopdf::Document::load_mem(bytes)
        .map_err(|e| RenderError::Pdf(format!("reload error: {e}")))?;
    let id_string =
        || lopdf::Object::String(id.as_bytes().to_vec(), lopdf::StringFormat::Literal);
    pdf.trailer
        .set("ID", lopdf::Object::Array(vec![id_string(), id_string()]));

    let mut out = Vec::new();
    pdf.save_to(&mut out)
        .map_err(|e| RenderError::Pdf(format!("save error: {e}")))?;
    Ok(out)
}

/// Built-in fonts use WinAnsiEncoding; `printpdf` silently drops anything else.
fn check_builtin_coverage(blocks: &[ReportBlock]) -> Result<(), RenderError> {
    let missing = blocks
        .iter()
        .filter_map(|b| match b {
            ReportBlock::Title(t) | ReportBlock::Line(t) | ReportBlock::Paragraph(t) => Some(t),
            ReportBlock::Gap => None,
        })
        .flat_map(|t| t.chars())
        .find(|c| !is_win_ansi(*c));

    match missing {
        Some(character) => Err(RenderError::MissingFont(character)),
        None => Ok(()),
    }
}

/// Printable Latin-1 plus the Windows-1252 additions in 0x80..=0x9F.
fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}')
        || matches!(
            c,
            '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž'
                | '‘' | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ'
                | 'ž' | 'Ÿ'
        )
}

/// Vertical write position on the current page.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    config: &'a ReportConfig,
    y: f32,
}

impl PageCursor<'_> {
    /// Moves down one line of `height`, starting a new page if it won't fit.
    fn reserve(&mut self, height: f32) {
        if self.y - height < self.config.margin_mm {
            let (page, layer) = self.doc.add_page(
                Mm(self.config.page_width_mm),
                Mm(self.config.page_height_mm),
                "Layer 1",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = self.config.page_height_mm - self.config.margin_mm;
        }
        self.y -= height;
    }

    fn write(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }
}

/// Left edge that roughly centres `text`, assuming an average glyph width of
/// half the font size.
fn centred_x(text: &str, size: f32, config: &ReportConfig) -> f32 {
    let width = text.chars().count() as f32 * size * 0.5 * MM_PER_PT;
    ((config.page_width_mm - width) / 2.0).max(config.margin_mm)
}

/// Content-derived id (first 16 bytes of SHA-256, hex) written as both halves
/// of the trailer `/ID`.
fn document_id(blocks: &[ReportBlock], generated_at: NaiveDateTime) -> String {
    let mut hasher = Sha256::new();
    hasher.update(to_text(blocks).as_bytes());
    hasher.update(generated_at.format("%Y-%m-%dT%H:%M:%S").to_string().as_bytes());
    hasher.finalize()[..16]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Simple word-wrap helper for PDF text rendering. Counts characters, not bytes.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len + word_len + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ─── Tests ────────────────────────────────────────────────────────────────────
