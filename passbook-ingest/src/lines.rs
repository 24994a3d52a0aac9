//! Positioned text lines for documents that come without extracted tables.
//!
//! A PDF page is read straight from its content stream: every shown glyph
//! keeps its baseline and horizontal extent, glyphs sharing a baseline form a
//! [`TextLine`], and a line breaks into [`TextChunk`]s wherever the gap is
//! wider than a couple of spaces. A [`ColumnGrid`] taken from a table's
//! header line then slices the lines below it into that table's columns, so
//! an empty withdrawal cell stays empty instead of pulling the deposit and
//! balance one column to the left.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Encoding, Object, ObjectId};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::document::Row;

/// Gap, in space widths, that separates two chunks on one line
const CHUNK_GAP_SPACES: f64 = 1.5;
/// Gap, in space widths, read as a word break when no space glyph was drawn
const WORD_GAP_SPACES: f64 = 0.5;
/// Advance in thousandths of an em when the font has no width table
const DEFAULT_GLYPH_WIDTH: f64 = 500.0;
/// Baselines closer than this many font sizes share a line
const BASELINE_TOLERANCE: f64 = 0.3;

static GAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+| {2,}").expect("gap pattern"));

/// Text with its horizontal extent on the page
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    pub text: String,
    pub x0: f64,
    pub x1: f64,
}

impl TextChunk {
    fn center(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }
}

/// Chunks sharing a baseline, left to right.
///
/// `y` grows down the page and `height` is the tallest font on the line, both
/// in the units of the chunk positions (points for PDFs, characters and
/// lines for plain text).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    pub y: f64,
    pub height: f64,
    pub chunks: Vec<TextChunk>,
}

impl TextLine {
    pub fn text(&self) -> String {
        self.chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// One cell per chunk; used to recognise header lines.
    pub fn cells(&self) -> Row {
        self.chunks.iter().map(|c| Some(c.text.clone())).collect()
    }
}

/// Lines of monospaced text: a character is one unit wide, a line one unit
/// tall, and tabs or runs of two or more spaces separate chunks.
pub fn lines_from_text(text: &str) -> Vec<TextLine> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| TextLine {
            y: idx as f64,
            height: 1.0,
            chunks: chunks_from_text(line),
        })
        .filter(|line| !line.chunks.is_empty())
        .collect()
}

fn chunks_from_text(line: &str) -> Vec<TextChunk> {
    let column = |byte: usize| line[..byte].chars().count() as f64;
    let gaps = GAP_RE
        .find_iter(line)
        .map(|m| (m.start(), m.end()))
        .chain(std::iter::once((line.len(), line.len())));

    let mut chunks = Vec::new();
    let mut start = 0;
    for (gap_start, gap_end) in gaps {
        let piece = &line[start..gap_start];
        let text = piece.trim();
        if !text.is_empty() {
            let lead = piece.len() - piece.trim_start().len();
            let x0 = column(start + lead);
            chunks.push(TextChunk {
                text: text.to_string(),
                x0,
                x1: x0 + text.chars().count() as f64,
            });
        }
        start = gap_end;
    }
    chunks
}

/// Column boundaries read off a header line: each boundary sits halfway
/// between neighbouring header chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGrid {
    bounds: Vec<f64>,
}

impl ColumnGrid {
    pub fn from_header(header: &TextLine) -> Self {
        let bounds = header
            .chunks
            .windows(2)
            .map(|pair| (pair[0].x1 + pair[1].x0) / 2.0)
            .collect();
        Self { bounds }
    }

    pub fn width(&self) -> usize {
        self.bounds.len() + 1
    }

    /// Place every chunk in the column holding its center. Columns nothing
    /// lands in stay `None`; chunks sharing a column are joined by a space.
    pub fn slice(&self, line: &TextLine) -> Row {
        let mut row: Row = vec![None; self.width()];
        for chunk in &line.chunks {
            let column = self.bounds.iter().filter(|b| chunk.center() > **b).count();
            match &mut row[column] {
                Some(cell) => {
                    cell.push(' ');
                    cell.push_str(&chunk.text);
                }
                slot => *slot = Some(chunk.text.clone()),
            }
        }
        row
    }
}

type Matrix = [f64; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// `m` applied first, then `n`
fn multiply(m: &Matrix, n: &Matrix) -> Matrix {
    [
        m[0] * n[0] + m[1] * n[2],
        m[0] * n[1] + m[1] * n[3],
        m[2] * n[0] + m[3] * n[2],
        m[2] * n[1] + m[3] * n[3],
        m[4] * n[0] + m[5] * n[2] + n[4],
        m[4] * n[1] + m[5] * n[3] + n[5],
    ]
}

fn translate(tx: f64, ty: f64) -> Matrix {
    [1.0, 0.0, 0.0, 1.0, tx, ty]
}

fn number(obj: &Object) -> Option<f64> {
    obj.as_float().ok().map(f64::from)
}

fn numbers<const N: usize>(operands: &[Object]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, obj) in out.iter_mut().zip(operands) {
        *slot = number(obj)?;
    }
    (operands.len() >= N).then_some(out)
}

/// Encoding and advance widths of one page font
struct FontMetrics<'a> {
    encoding: Encoding<'a>,
    /// Bytes per character code: two for composite fonts
    code_len: usize,
    first_char: i64,
    widths: Vec<f64>,
}

impl<'a> FontMetrics<'a> {
    fn new(doc: &'a Document, font: &'a Dictionary) -> lopdf::Result<Self> {
        let encoding = font.get_font_encoding(doc)?;
        let composite = font
            .get(b"Subtype")
            .and_then(Object::as_name)
            .is_ok_and(|subtype| subtype == b"Type0");
        let first_char = font.get(b"FirstChar").and_then(Object::as_i64).unwrap_or(0);
        let widths = font
            .get_deref(b"Widths", doc)
            .and_then(Object::as_array)
            .map(|widths| {
                widths
                    .iter()
                    .map(|w| number(w).unwrap_or(DEFAULT_GLYPH_WIDTH))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            encoding,
            code_len: if composite { 2 } else { 1 },
            first_char,
            widths,
        })
    }

    fn width(&self, code: i64) -> f64 {
        usize::try_from(code - self.first_char)
            .ok()
            .and_then(|idx| self.widths.get(idx).copied())
            .filter(|w| *w > 0.0)
            .unwrap_or(DEFAULT_GLYPH_WIDTH)
    }

    fn space_width(&self) -> f64 {
        if self.code_len == 1 {
            self.width(32)
        } else {
            DEFAULT_GLYPH_WIDTH
        }
    }

    fn decode(&self, code: &[u8]) -> String {
        Document::decode_text(&self.encoding, code)
            .unwrap_or_else(|_| code.iter().map(|&b| char::from(b)).collect())
    }
}

/// One shown character in page space
#[derive(Debug, Clone)]
struct Glyph {
    text: String,
    x0: f64,
    x1: f64,
    baseline: f64,
    size: f64,
    space: f64,
}

impl Glyph {
    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Text state carried between content-stream operators
struct TextState<'f, 'a> {
    ctm: Matrix,
    saved: Vec<Matrix>,
    tm: Matrix,
    tlm: Matrix,
    font: Option<&'f FontMetrics<'a>>,
    size: f64,
    char_spacing: f64,
    word_spacing: f64,
    scale: f64,
    leading: f64,
}

impl<'f, 'a> TextState<'f, 'a> {
    fn new() -> Self {
        Self {
            ctm: IDENTITY,
            saved: Vec::new(),
            tm: IDENTITY,
            tlm: IDENTITY,
            font: None,
            size: 0.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            scale: 1.0,
            leading: 0.0,
        }
    }

    fn next_line(&mut self, tx: f64, ty: f64) {
        self.tlm = multiply(&translate(tx, ty), &self.tlm);
        self.tm = self.tlm;
    }

    fn show(&mut self, bytes: &[u8], glyphs: &mut Vec<Glyph>) {
        let Some(font) = self.font else {
            return;
        };
        for code in bytes.chunks(font.code_len) {
            let value = code.iter().fold(0_i64, |acc, &b| (acc << 8) | i64::from(b));
            let word = if code == b" ".as_slice() { self.word_spacing } else { 0.0 };
            let advance =
                (font.width(value) / 1000.0 * self.size + self.char_spacing + word) * self.scale;

            let start = multiply(&self.tm, &self.ctm);
            self.tm = multiply(&translate(advance, 0.0), &self.tm);
            let end = multiply(&self.tm, &self.ctm);

            let x_scale = start[0].hypot(start[1]);
            let y_scale = start[2].hypot(start[3]);
            glyphs.push(Glyph {
                text: font.decode(code),
                x0: start[4],
                x1: end[4],
                baseline: start[5],
                size: self.size * y_scale,
                space: font.space_width() / 1000.0 * self.size * self.scale * x_scale,
            });
        }
    }

    fn adjust(&mut self, thousandths: f64) {
        let tx = -thousandths / 1000.0 * self.size * self.scale;
        self.tm = multiply(&translate(tx, 0.0), &self.tm);
    }
}

/// Read the text lines of one page, top to bottom.
pub fn page_lines(doc: &Document, page_id: ObjectId) -> lopdf::Result<Vec<TextLine>> {
    let fonts: BTreeMap<Vec<u8>, FontMetrics> = doc
        .get_page_fonts(page_id)?
        .into_iter()
        .filter(|(_, font)| font.type_is(b"Font"))
        .filter_map(|(name, font)| match FontMetrics::new(doc, font) {
            Ok(metrics) => Some((name, metrics)),
            Err(e) => {
                debug!(font = %String::from_utf8_lossy(&name), error = %e, "font skipped");
                None
            }
        })
        .collect();

    let content = doc.get_and_decode_page_content(page_id)?;
    let mut state = TextState::new();
    let mut glyphs = Vec::new();

    for op in &content.operations {
        let operands = op.operands.as_slice();
        match op.operator.as_str() {
            "q" => state.saved.push(state.ctm),
            "Q" => state.ctm = state.saved.pop().unwrap_or(IDENTITY),
            "cm" => {
                if let Some(m) = numbers::<6>(operands) {
                    state.ctm = multiply(&m, &state.ctm);
                }
            }
            "BT" => {
                state.tm = IDENTITY;
                state.tlm = IDENTITY;
            }
            "Tf" => {
                state.font = operands
                    .first()
                    .and_then(|name| name.as_name().ok())
                    .and_then(|name| fonts.get(name));
                state.size = operands.get(1).and_then(number).unwrap_or(0.0);
            }
            "Tc" => state.char_spacing = operands.first().and_then(number).unwrap_or(0.0),
            "Tw" => state.word_spacing = operands.first().and_then(number).unwrap_or(0.0),
            "Tz" => state.scale = operands.first().and_then(number).unwrap_or(100.0) / 100.0,
            "TL" => state.leading = operands.first().and_then(number).unwrap_or(0.0),
            "Td" => {
                if let Some([tx, ty]) = numbers::<2>(operands) {
                    state.next_line(tx, ty);
                }
            }
            "TD" => {
                if let Some([tx, ty]) = numbers::<2>(operands) {
                    state.leading = -ty;
                    state.next_line(tx, ty);
                }
            }
            "Tm" => {
                if let Some(m) = numbers::<6>(operands) {
                    state.tm = m;
                    state.tlm = m;
                }
            }
            "T*" => state.next_line(0.0, -state.leading),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    state.show(bytes, &mut glyphs);
                }
            }
            "'" => {
                state.next_line(0.0, -state.leading);
                if let Some(Object::String(bytes, _)) = operands.first() {
                    state.show(bytes, &mut glyphs);
                }
            }
            "\"" => {
                if let Some([aw, ac]) = numbers::<2>(operands) {
                    state.word_spacing = aw;
                    state.char_spacing = ac;
                }
                state.next_line(0.0, -state.leading);
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    state.show(bytes, &mut glyphs);
                }
            }
            "TJ" => {
                let Some(Object::Array(items)) = operands.first() else {
                    continue;
                };
                for item in items {
                    match item {
                        Object::String(bytes, _) => state.show(bytes, &mut glyphs),
                        other => {
                            if let Some(n) = number(other) {
                                state.adjust(n);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(lines_from_glyphs(glyphs))
}

fn lines_from_glyphs(mut glyphs: Vec<Glyph>) -> Vec<TextLine> {
    glyphs.retain(|g| g.size > 0.0);
    glyphs.sort_by(|a, b| b.baseline.total_cmp(&a.baseline));

    let mut rows: Vec<Vec<Glyph>> = Vec::new();
    for glyph in glyphs {
        match rows.last_mut() {
            Some(row)
                if (row[0].baseline - glyph.baseline).abs()
                    <= BASELINE_TOLERANCE * row[0].size.max(glyph.size) =>
            {
                row.push(glyph)
            }
            _ => rows.push(vec![glyph]),
        }
    }

    rows.into_iter()
        .filter_map(|mut row| {
            row.sort_by(|a, b| a.x0.total_cmp(&b.x0));
            let line = TextLine {
                y: -row[0].baseline,
                height: row.iter().map(|g| g.size).fold(0.0, f64::max),
                chunks: chunks_from_glyphs(&row),
            };
            (!line.chunks.is_empty()).then_some(line)
        })
        .collect()
}

fn chunks_from_glyphs(row: &[Glyph]) -> Vec<TextChunk> {
    let mut chunks: Vec<TextChunk> = Vec::new();
    let mut spaced = false;

    for glyph in row {
        if glyph.is_blank() {
            spaced = true;
            continue;
        }
        match chunks.last_mut() {
            Some(chunk) if glyph.x0 - chunk.x1 <= CHUNK_GAP_SPACES * glyph.space => {
                if spaced || glyph.x0 - chunk.x1 > WORD_GAP_SPACES * glyph.space {
                    chunk.text.push(' ');
                }
                chunk.text.push_str(&glyph.text);
                chunk.x1 = chunk.x1.max(glyph.x1);
            }
            _ => chunks.push(TextChunk {
                text: glyph.text.clone(),
                x0: glyph.x0,
                x1: glyph.x1,
            }),
        }
        spaced = false;
    }
    chunks
}
