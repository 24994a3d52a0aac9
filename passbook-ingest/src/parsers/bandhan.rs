//! Bandhan Bank
//!
//! Dates are spelled `June30, 2025` (no space between month and day) and
//! amounts carry an `INR` prefix. Later pages repeat the table without a
//! header row, so header-less tables whose first cell is a date qualify.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Bandhan,
        columns: 6,
        serial: None,
        date: 0,
        date_pattern: r"[A-Za-z]+\s?\d{1,2},\s*\d{4}",
        date_formats: &["%B%d, %Y", "%B %d, %Y"],
        description: 2,
        reference: None,
        amounts: AmountColumns::Marker { amount: 3, marker: 4 },
        balance: 5,
        dialect: AmountDialect::CurrencyPrefixed,
        invalid_amount: InvalidAmount::Zero,
        continuation: true,
    }
}
