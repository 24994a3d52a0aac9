//! Karnataka Bank: Date | Particulars | Withdrawals | Deposits | Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Karnataka,
        columns: 5,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}[-/]\d{2}[-/]\d{4}",
        date_formats: &["%d-%m-%Y", "%d/%m/%Y"],
        description: 1,
        reference: None,
        amounts: AmountColumns::Split { debit: 2, credit: 3 },
        balance: 4,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
