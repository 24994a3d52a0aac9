//! IDBI Bank: Date | Particulars | Chq. no | Withdrawals | Deposits | Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Idbi,
        columns: 6,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}/\d{2}/\d{4}",
        date_formats: &["%d/%m/%Y"],
        description: 1,
        reference: Some(2),
        amounts: AmountColumns::Split { debit: 3, credit: 4 },
        balance: 5,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
