//! Bank of Baroda
//!
//! Serial No | Transaction Date | Value Date | Description | Cheque Number |
//!   Debit | Credit | Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Bob,
        columns: 8,
        serial: Some(0),
        date: 1,
        date_pattern: r"\d{2}[/-]\d{2}[/-]\d{4}",
        date_formats: &["%d/%m/%Y", "%d-%m-%Y"],
        description: 3,
        reference: Some(4),
        amounts: AmountColumns::Split { debit: 5, credit: 6 },
        balance: 7,
        dialect: AmountDialect::Annotated,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
