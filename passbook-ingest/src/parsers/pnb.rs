//! Punjab National Bank
//!
//! Date | Instrument ID | Amount | Type | Balance | Remarks, with `DR`/`CR` in the Type column.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Pnb,
        columns: 6,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}/\d{2}/\d{4}",
        date_formats: &["%d/%m/%Y"],
        description: 5,
        reference: Some(1),
        amounts: AmountColumns::Marker { amount: 2, marker: 3 },
        balance: 4,
        dialect: AmountDialect::Annotated,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}
