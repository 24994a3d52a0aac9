//! passbook-ingest: statement documents, per-bank extraction strategies, and
//! the parse orchestrator.

pub mod document;
pub mod error;
pub mod lines;
pub mod orchestrator;
pub mod parsers;
pub mod registry;
pub mod strategy;

pub use document::{
    DocumentSource, ExtractedDocument, ExtractedPage, PdfDocument, Row, Table, open_document,
};
pub use error::DocumentError;
pub use lines::{ColumnGrid, TextChunk, TextLine, lines_from_text};
pub use orchestrator::{identify_statement, parse_document, parse_statement};
pub use registry::{StrategyRegistry, registry};
pub use strategy::{
    ColumnLayout, ColumnStrategy, ExtractionStrategy, REFERENCE_SEPARATOR, RowOutcome, SkipReason,
};
