use chrono::NaiveDate;
use passbook_core::{BankTag, UNKNOWN_BANK};
use passbook_ingest::{DocumentError, ExtractedDocument, parse_document, parse_statement};
use serde_json::json;
use std::io::Write;

fn axis_header() -> serde_json::Value {
    json!([
        "S.No", "Transaction Date", "Value Date", "Particulars", "Amount (INR)",
        "Debit/Credit", "Balance(INR)", "Cheque Number", "Branch Name(SOL)"
    ])
}

fn axis_dump() -> serde_json::Value {
    json!({
        "text": concat!(
            "STATEMENT OF AXIS BANK ACCOUNT\n",
            "Account No: 917010045678123\n",
            "IFSC: UTIB0000456\n",
            "Opening Balance: INR 10,000.00",
        ),
        "pages": [
            {
                "tables": [
                    [["Account Summary", "Value"], ["Opening", "10,000.00"]],
                    [
                        axis_header(),
                        [
                            "1", "01/04/2024", "01/04/2024", "Sample Payment", "1,500.00", "DR",
                            "8,500.00", "", "Main"
                        ],
                        [null, null, null, null, null, null, null, null, null],
                        [
                            "2", "03/04/2024", "03/04/2024", "Salary", "40,000.00", "CR",
                            "48,500.00", null, "Main"
                        ]
                    ],
                    [
                        axis_header(),
                        [
                            "3", "02/04/2024", "02/04/2024", "Late-listed fee", "100.00", "DR",
                            "48,400.00", "", "Main"
                        ]
                    ]
                ]
            },
            {
                "tables": [
                    [
                        axis_header(),
                        [
                            "abc", "05/04/2024", "05/04/2024", "Not a row", "1.00", "DR", "1.00",
                            "", ""
                        ],
                        [
                            "4", "05/04/2024", "05/04/2024", "UPI/CAFE", "250.00", "DR",
                            "48,150.00", "", "Main"
                        ],
                        ["Total", "", "", "", "41,850.00", "", "", "", ""]
                    ]
                ]
            }
        ]
    })
}

#[test]
fn test_axis_document_end_to_end() {
    let doc: ExtractedDocument = serde_json::from_value(axis_dump()).unwrap();
    let result = parse_document(&doc);

    assert_eq!(result.bank_name, "AXIS");
    assert_eq!(result.total_transactions, 4);
    assert_eq!(result.transactions.len(), 4);
    assert_eq!(result.metadata.account_number.as_deref(), Some("917010045678123"));
    assert_eq!(result.metadata.opening_balance, Some(10000.0));

    let first = &result.transactions[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    assert_eq!(first.description, "Sample Payment");
    assert_eq!((first.debit, first.credit, first.balance), (1500.0, 0.0, 8500.0));
    assert_eq!(first.bank_name, BankTag::Axis);

    for txn in &result.transactions {
        assert!(txn.is_consistent(), "{txn:?}");
    }
}

#[test]
fn test_document_order_is_preserved_not_date_sorted() {
    let doc: ExtractedDocument = serde_json::from_value(axis_dump()).unwrap();
    let result = parse_document(&doc);
    let descriptions: Vec<&str> = result
        .transactions
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    // Page 1 table 2, page 1 table 3, then page 2; the 02/04 fee stays after the 03/04 salary.
    assert_eq!(descriptions, vec!["Sample Payment", "Salary", "Late-listed fee", "UPI/CAFE"]);
}

#[test]
fn test_bandhan_continuation_pages() {
    let dump = json!({
        "pages": [
            {
                "text": "Bandhan Bank Limited\nAccount Number 10180001234567\nIFSC BDBL0001904",
                "tables": [[
                    [
                        "Transaction Date", "Value Date", "Description", "Amount", "Dr / Cr",
                        "Balance"
                    ],
                    [
                        "June30, 2025", "June30, 2025", "UPI/GROCER", "INR1,200.50", "DR",
                        "INR8,799.50"
                    ]
                ]]
            },
            {
                "tables": [[
                    [
                        "July1,\n2025", "July1,\n2025", "SALARY", "INR50,000.00", "CR",
                        "INR58,799.50"
                    ],
                    ["July2, 2025", "July2, 2025", "ATM", "-", "", "INR58,799.50"]
                ]]
            }
        ]
    });
    let doc: ExtractedDocument = serde_json::from_value(dump).unwrap();
    let result = parse_document(&doc);

    assert_eq!(result.bank_name, "BANDHAN");
    assert_eq!(result.metadata.account_number.as_deref(), Some("10180001234567"));
    assert_eq!(result.total_transactions, 3);
    assert_eq!(result.transactions[0].debit, 1200.50);
    assert_eq!(result.transactions[1].date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    assert_eq!(result.transactions[1].credit, 50000.0);
    assert_eq!(result.transactions[2].debit, 0.0);
    assert_eq!(result.transactions[2].credit, 0.0);
}

#[test]
fn test_hdfc_ifsc_only_identification() {
    let dump = json!({
        "text": concat!(
            "Statement From 01/04/24 To 30/04/24\n",
            "RTGS/NEFT IFSC: HDFC0001234\n",
            "A/C 50100123456789",
        ),
        "pages": [{
            "tables": [[
                [
                    "Date", "Narration", "Chq./Ref.No.", "Value Dt", "Withdrawal Amt.",
                    "Deposit Amt.", "Closing Balance"
                ],
                ["01/04/24", "UPI-SWIGGY", "0000412345", "01/04/24", "450.00", "", "9,550.00"]
            ]]
        }]
    });
    let doc: ExtractedDocument = serde_json::from_value(dump).unwrap();
    let result = parse_document(&doc);
    assert_eq!(result.bank_name, "HDFC");
    assert_eq!(result.metadata.account_number.as_deref(), Some("50100123456789"));
    assert_eq!(result.transactions[0].description, "UPI-SWIGGY | Ref: 0000412345");
}

#[test]
fn test_parse_statement_reads_json_dump_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", axis_dump()).unwrap();

    let result = parse_statement(file.path(), None).unwrap();
    assert_eq!(result.bank_name, "AXIS");
    assert_eq!(result.total_transactions, 4);
}

#[test]
fn test_unknown_bank_from_disk_is_ok() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", json!({"text": "Grocery receipt", "pages": []})).unwrap();

    let result = parse_statement(file.path(), None).unwrap();
    assert_eq!(result.bank_name, UNKNOWN_BANK);
    assert!(result.transactions.is_empty());
}

#[test]
fn test_unreadable_pdf_is_a_document_error() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"this is not a pdf").unwrap();

    let err = parse_statement(file.path(), Some("secret")).unwrap_err();
    assert!(matches!(err, DocumentError::Corrupt(_)), "{err}");
}
