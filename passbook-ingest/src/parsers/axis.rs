//! Axis Bank
//!
//! Numbered rows with a single amount column and a `DR`/`CR` marker:
//!   S.No | Transaction Date | Value Date | Particulars | Amount (INR) | Debit/Credit |
//!   Balance(INR) | Cheque Number | Branch Name(SOL)
//! Dates are DD/MM/YYYY.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Axis,
        columns: 9,
        serial: Some(0),
        date: 1,
        date_pattern: r"\d{2}/\d{2}/\d{4}",
        date_formats: &["%d/%m/%Y"],
        description: 3,
        reference: Some(7),
        amounts: AmountColumns::Marker { amount: 4, marker: 5 },
        balance: 6,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: false,
    }
}
