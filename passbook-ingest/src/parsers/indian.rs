//! Indian Bank: Post Date | Value Date | Details | Chq.No. | Debit | Credit | Balance
//!
//! Balances are printed with a trailing `CR`.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Indian,
        columns: 7,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}/\d{2}/\d{4}|\d{1,2} [A-Za-z]{3} \d{4}",
        date_formats: &["%d/%m/%Y", "%d %b %Y"],
        description: 2,
        reference: Some(3),
        amounts: AmountColumns::Split { debit: 4, credit: 5 },
        balance: 6,
        dialect: AmountDialect::Annotated,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
