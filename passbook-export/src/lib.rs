//! passbook-export: period filtering, statement summaries, and CSV ledger export

pub mod csv_export;
pub mod filter;
pub mod summary;

pub use csv_export::{CSV_HEADER, write_csv, write_csv_file};
pub use filter::within_period;
pub use summary::StatementSummary;
