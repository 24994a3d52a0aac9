//! Kotak Mahindra Bank
//!
//! Date | Narration | Chq/Ref No. | Withdrawal(Dr) | Deposit(Cr) | Balance,
//! balances suffixed `(Cr)`.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Kotak,
        columns: 6,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}[-/]\d{2}[-/]\d{4}",
        date_formats: &["%d-%m-%Y", "%d/%m/%Y"],
        description: 1,
        reference: Some(2),
        amounts: AmountColumns::Split { debit: 3, credit: 4 },
        balance: 5,
        dialect: AmountDialect::Annotated,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
