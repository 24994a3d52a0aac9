//! IndusInd Bank: Date | Particulars | Chq No/Ref No | Withdrawal | Deposit | Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Indusind,
        columns: 6,
        serial: None,
        date: 0,
        date_pattern: r"\d{1,2} [A-Za-z]{3} \d{4}|\d{2}-[A-Za-z]{3}-\d{4}|\d{2}/\d{2}/\d{4}",
        date_formats: &["%d %b %Y", "%d-%b-%Y", "%d/%m/%Y"],
        description: 1,
        reference: Some(2),
        amounts: AmountColumns::Split { debit: 3, credit: 4 },
        balance: 5,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
