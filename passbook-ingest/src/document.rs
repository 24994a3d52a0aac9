//! Document extraction boundary.
//!
//! The engine needs the whole document's text (for identification) and, per
//! page, either the tables an extractor found or the positioned text lines
//! the tables can be rebuilt from. Two sources implement that:
//! `PdfDocument` reads the PDF itself with `lopdf`, and `ExtractedDocument`
//! loads a JSON dump written by an external table extractor.

use std::fs;
use std::path::Path;

use lopdf::Document;
use lopdf::encryption::DecryptionError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DocumentError, Result};
use crate::lines::{TextLine, lines_from_text, page_lines};

/// One extracted table row; extractors report merged or missing cells as `None`.
pub type Row = Vec<Option<String>>;
/// Rows in top-to-bottom order
pub type Table = Vec<Row>;

/// What the engine consumes from an opened document.
pub trait DocumentSource {
    /// Whole-document text, used once for identification and metadata
    fn text(&self) -> String;

    fn page_count(&self) -> usize;

    /// Tables on a zero-based page, in discovery order
    fn page_tables(&self, page: usize) -> Vec<Table>;

    /// Positioned text lines on a zero-based page, top to bottom
    fn page_lines(&self, _page: usize) -> Vec<TextLine> {
        Vec::new()
    }
}

/// Tables as dumped by an external extractor:
/// `{"text": "...", "pages": [{"text": "...", "tables": [[["S.No", null], ...]]}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pages: Vec<ExtractedPage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl ExtractedDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl DocumentSource for ExtractedDocument {
    fn text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        // No text layer in the dump: fall back to page text, then table cells.
        self.pages
            .iter()
            .map(|page| match &page.text {
                Some(text) => text.clone(),
                None => page
                    .tables
                    .iter()
                    .flatten()
                    .map(|row| {
                        row.iter()
                            .flatten()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_tables(&self, page: usize) -> Vec<Table> {
        self.pages
            .get(page)
            .map(|p| p.tables.clone())
            .unwrap_or_default()
    }
}

/// A PDF opened with `lopdf`. Pages are read into positioned text lines
/// once at open; no ruled-table detection is attempted.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pages: Vec<Vec<TextLine>>,
}

impl PdfDocument {
    pub fn open(path: &Path, password: Option<&str>) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, password)
    }

    /// Load from memory. Encrypted documents are decrypted with `password`,
    /// or with the empty user password when none is supplied.
    pub fn from_bytes(bytes: &[u8], password: Option<&str>) -> Result<Self> {
        let mut doc =
            Document::load_mem(bytes).map_err(|e| DocumentError::Corrupt(e.to_string()))?;

        if doc.is_encrypted() {
            decrypt(&mut doc, password)?;
        }

        let pages = doc
            .get_pages()
            .into_iter()
            .map(|(number, page_id)| match page_lines(&doc, page_id) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!(page = number, error = %e, "page text extraction failed");
                    Vec::new()
                }
            })
            .collect::<Vec<_>>();

        debug!(pages = pages.len(), "opened pdf");
        Ok(Self { pages })
    }

    /// Pages of monospaced text, as printed by `pdftotext -layout`.
    pub fn from_page_text(pages: Vec<String>) -> Self {
        Self {
            pages: pages.iter().map(|text| lines_from_text(text)).collect(),
        }
    }
}

/// Only a rejected password is a password problem; schemes `lopdf` cannot
/// decrypt (AES among them) and broken encryption dictionaries are not.
fn decrypt(doc: &mut Document, password: Option<&str>) -> Result<()> {
    match doc.decrypt(password.unwrap_or("")) {
        Ok(()) => Ok(()),
        Err(lopdf::Error::Decryption(DecryptionError::IncorrectPassword)) => match password {
            Some(_) => Err(DocumentError::IncorrectPassword),
            None => Err(DocumentError::PasswordRequired),
        },
        Err(lopdf::Error::Decryption(
            e @ (DecryptionError::UnsupportedEncryption
            | DecryptionError::InvalidKeyLength
            | DecryptionError::InvalidRevision),
        )) => Err(DocumentError::UnsupportedEncryption(e.to_string())),
        Err(e) => Err(DocumentError::Corrupt(e.to_string())),
    }
}

impl DocumentSource for PdfDocument {
    fn text(&self) -> String {
        self.pages
            .iter()
            .map(|lines| {
                lines
                    .iter()
                    .map(TextLine::text)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_tables(&self, _page: usize) -> Vec<Table> {
        Vec::new()
    }

    fn page_lines(&self, page: usize) -> Vec<TextLine> {
        self.pages.get(page).cloned().unwrap_or_default()
    }
}

/// Open a statement: `.json` paths are extraction dumps, anything else is a PDF.
pub fn open_document(
    path: &Path,
    password: Option<&str>,
) -> Result<Box<dyn DocumentSource + Send>> {
    let is_dump = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_dump {
        Ok(Box::new(ExtractedDocument::load(path)?))
    } else {
        Ok(Box::new(PdfDocument::open(path, password)?))
    }
}
