//! Central Bank of India
//!
//! Post Date | Value Date | Branch Code | Cheque Number | Account Description |
//!   Debit | Credit | Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Cbi,
        columns: 8,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}/\d{2}/\d{4}",
        date_formats: &["%d/%m/%Y"],
        description: 4,
        reference: Some(3),
        amounts: AmountColumns::Split { debit: 5, credit: 6 },
        balance: 7,
        dialect: AmountDialect::Annotated,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
