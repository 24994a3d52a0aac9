//! Canara Bank
//!
//! Date | Particulars | Deposits | Withdrawals | Balance; deposits precede
//! withdrawals and the date cell may carry a time (`01-04-2024 10:15:22`).

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Canara,
        columns: 5,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}-\d{2}-\d{4}",
        date_formats: &["%d-%m-%Y"],
        description: 1,
        reference: None,
        amounts: AmountColumns::Split { debit: 3, credit: 2 },
        balance: 4,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
