//! Statement orchestrator: open, identify, dispatch, assemble.

use std::path::Path;

use chrono::Utc;
use passbook_core::{BankTag, ParseResult, StatementMetadata, identify, signature};
use tracing::{debug, info, warn};

use crate::document::{DocumentSource, open_document};
use crate::error::Result;
use crate::registry::registry;

/// Parse a statement file. `.json` extraction dumps are accepted alongside PDFs.
///
/// Fails only when the document cannot be opened. An unrecognised bank is a
/// successful result tagged `UNKNOWN` with no transactions.
pub fn parse_statement(path: impl AsRef<Path>, password: Option<&str>) -> Result<ParseResult> {
    let path = path.as_ref();
    let doc = open_document(path, password)?;
    info!(path = %path.display(), pages = doc.page_count(), "parsing statement");
    Ok(parse_document(&*doc))
}

/// Identify the issuing bank of a statement file without extracting rows.
pub fn identify_statement(
    path: impl AsRef<Path>,
    password: Option<&str>,
) -> Result<Option<BankTag>> {
    let doc = open_document(path.as_ref(), password)?;
    Ok(identify(&doc.text()))
}

/// Run identification and the matching strategy over an opened document.
///
/// Pages with extracted tables are read table by table; pages without any
/// are rebuilt from their text lines, with the header columns carried from
/// one page to the next. Transactions come back in page order, then table order within a page,
/// then row order within a table. They are not re-sorted by date.
pub fn parse_document(doc: &dyn DocumentSource) -> ParseResult {
    let parsed_at = Utc::now();
    let text = doc.text();

    let Some(bank) = identify(&text) else {
        warn!("no bank signature matched");
        return ParseResult::unknown(parsed_at);
    };
    let Some(strategy) = registry().get(bank) else {
        warn!(%bank, "bank identified but no extraction strategy is registered");
        return ParseResult::unknown(parsed_at);
    };
    info!(%bank, "identified bank");

    let mut transactions = Vec::new();
    let mut grid = None;
    for page in 0..doc.page_count() {
        let extracted = doc.page_tables(page);
        let tables: Vec<_> = if extracted.is_empty() {
            strategy.tables_from_lines(&doc.page_lines(page), &mut grid)
        } else {
            extracted
                .into_iter()
                .filter(|table| strategy.is_transaction_table(table))
                .collect()
        };

        for (table_idx, table) in tables.iter().enumerate() {
            let rows = strategy.extract_table(table);
            debug!(
                page = page + 1,
                table = table_idx + 1,
                rows = rows.len(),
                "transaction table"
            );
            transactions.extend(rows);
        }
    }

    let sig = signature(bank);
    let metadata = StatementMetadata {
        account_number: sig.account_number(&text),
        opening_balance: sig.opening_balance(&text),
        parsed_at,
    };
    info!(%bank, transactions = transactions.len(), "statement parsed");

    ParseResult::identified(bank, transactions, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ExtractedDocument, ExtractedPage, PdfDocument, Table};
    use passbook_core::{BankTag, UNKNOWN_BANK};

    fn table(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|r| r.iter().map(|c| Some(c.to_string())).collect())
            .collect()
    }

    #[test]
    fn test_unmatched_document_is_unknown_not_an_error() {
        let doc = ExtractedDocument {
            text: Some("Quarterly brochure".to_string()),
            pages: vec![ExtractedPage {
                text: None,
                tables: vec![table(&[&[
                    "1",
                    "01/04/2024",
                    "01/04/2024",
                    "x",
                    "1.00",
                    "DR",
                    "1.00",
                ]])],
            }],
        };
        let result = parse_document(&doc);
        assert_eq!(result.bank_name, UNKNOWN_BANK);
        assert_eq!(result.total_transactions, 0);
        assert!(result.transactions.is_empty());
        assert_eq!(result.metadata.account_number, None);
    }

    #[test]
    fn test_identified_bank_without_strategy_is_unknown() {
        let doc = ExtractedDocument {
            text: Some("The Jammu and Kashmir Bank Ltd. IFSC JAKA0ABCDEF".to_string()),
            pages: vec![],
        };
        assert_eq!(parse_document(&doc).bank_name, UNKNOWN_BANK);
    }

    #[test]
    fn test_account_number_absent_is_none() {
        let doc = ExtractedDocument {
            text: Some("Statement of Axis Bank".to_string()),
            pages: vec![],
        };
        let result = parse_document(&doc);
        assert_eq!(result.bank_name, "AXIS");
        assert_eq!(result.metadata.account_number, None);
        assert_eq!(result.total_transactions, 0);
    }

    fn hdfc_line(cells: [&str; 7]) -> String {
        format!(
            "{:<10}{:<20}{:<15}{:<11}{:>15}{:>15}{:>18}",
            cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6]
        )
    }

    fn hdfc_header() -> String {
        hdfc_line([
            "Date",
            "Narration",
            "Chq./Ref.No.",
            "Value Dt",
            "Withdrawal Amt.",
            "Deposit Amt.",
            "Closing Balance",
        ])
    }

    /// Posting and value date are the same; `amounts` is withdrawal, deposit, balance.
    fn hdfc_entry(date: &str, narration: &str, reference: &str, amounts: [&str; 3]) -> String {
        let [withdrawal, deposit, balance] = amounts;
        hdfc_line([date, narration, reference, date, withdrawal, deposit, balance])
    }

    #[test]
    fn test_page_text_keeps_empty_amount_cells_in_their_columns() {
        let page = [
            "HDFC BANK LTD  IFSC HDFC0001234".to_string(),
            "Statement of account  01/04/24 to 30/04/24".to_string(),
            hdfc_header(),
            hdfc_entry("01/04/24", "UPI-SWIGGY", "0000412345", ["450.00", "", "9,550.00"]),
            hdfc_entry("02/04/24", "SALARY ACME", "0000412346", ["", "5,000.00", "14,550.00"]),
        ]
        .join("\n");
        let result = parse_document(&PdfDocument::from_page_text(vec![page]));

        assert_eq!(result.bank_name, "HDFC");
        assert_eq!(result.total_transactions, 2);
        let (withdrawal, deposit) = (&result.transactions[0], &result.transactions[1]);
        assert_eq!(withdrawal.description, "UPI-SWIGGY | Ref: 0000412345");
        assert_eq!((withdrawal.debit, withdrawal.credit), (450.0, 0.0));
        assert_eq!(withdrawal.balance, 9550.0);
        assert_eq!(deposit.description, "SALARY ACME | Ref: 0000412346");
        assert_eq!((deposit.debit, deposit.credit), (0.0, 5000.0));
        assert_eq!(deposit.balance, 14550.0);
        assert_eq!(deposit.bank_name, BankTag::Hdfc);
    }

    #[test]
    fn test_wrapped_narration_and_header_less_next_page() {
        let first = [
            "HDFC BANK LTD  IFSC HDFC0001234".to_string(),
            hdfc_header(),
            hdfc_entry("01/04/24", "NEFT CR-ACME", "N0931", ["", "45,000.00", "52,310.40"]),
            hdfc_line(["", "PAYROLL APRIL", "", "", "", "", ""]),
            String::new(),
            String::new(),
            hdfc_line(["", "Page 1 of 2", "", "", "", "", ""]),
        ]
        .join("\n");
        let second = hdfc_entry("03/04/24", "ATM-MG ROAD", "", ["2,000.00", "", "50,310.40"]);
        let result = parse_document(&PdfDocument::from_page_text(vec![first, second]));

        assert_eq!(result.total_transactions, 2);
        assert_eq!(
            result.transactions[0].description,
            "NEFT CR-ACME PAYROLL APRIL | Ref: N0931"
        );
        assert_eq!(result.transactions[1].debit, 2000.0);
        assert_eq!(result.transactions[1].balance, 50310.4);
    }

    #[test]
    fn test_header_narrower_than_the_layout_yields_no_rows() {
        // Withdrawal and deposit headers printed on a second line
        let page = [
            "HDFC BANK LTD  IFSC HDFC0001234".to_string(),
            format!(
                "{:<10}{:<20}{:<15}{:<11}{:>48}",
                "Date", "Narration", "Chq./Ref.No.", "Value Dt", "Closing Balance"
            ),
            hdfc_entry("01/04/24", "UPI-SWIGGY", "0000412345", ["450.00", "", "9,550.00"]),
        ]
        .join("\n");
        let result = parse_document(&PdfDocument::from_page_text(vec![page]));
        assert_eq!(result.bank_name, "HDFC");
        assert_eq!(result.total_transactions, 0);
    }
}
