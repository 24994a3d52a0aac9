//! Indian Overseas Bank
//!
//! Nine columns; the reference and cheque numbers are separate and only the
//! reference is kept in the narration. Dates look like `05-Apr-2024`.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Iob,
        columns: 9,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}-[A-Za-z]{3}-\d{4}|\d{2}/\d{2}/\d{4}",
        date_formats: &["%d-%b-%Y", "%d/%m/%Y"],
        description: 2,
        reference: Some(3),
        amounts: AmountColumns::Split { debit: 6, credit: 7 },
        balance: 8,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
