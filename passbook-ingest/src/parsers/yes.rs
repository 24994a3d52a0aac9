//! Yes Bank
//!
//! Transaction Date | Value Date | Description | Reference Number | Withdrawals |
//!   Deposits | Running Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Yes,
        columns: 7,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}/\d{2}/\d{4}",
        date_formats: &["%d/%m/%Y"],
        description: 2,
        reference: Some(3),
        amounts: AmountColumns::Split { debit: 4, credit: 5 },
        balance: 6,
        dialect: AmountDialect::Plain,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::row;
    use crate::strategy::{ColumnStrategy, ExtractionStrategy};

    #[test]
    fn test_header_detection_tolerates_a_dropped_cell() {
        let strategy = ColumnStrategy::new(layout());
        // "Reference Number" and "Value Date" were merged away by the extractor.
        let table = vec![
            row(&["Transaction Date", "Description", "Withdrawals", "Deposits", "Running Balance"]),
            row(&["11/09/2024", "", "RTGS OUT", "", "1,20,000.00", "", "3,400.00"]),
        ];
        assert!(strategy.is_transaction_table(&table));
        assert_eq!(strategy.min_header_matches(), 5);
    }

    #[test]
    fn test_withdrawal() {
        let strategy = ColumnStrategy::new(layout());
        let txn = strategy
            .parse_row(&row(&[
                "11/09/2024",
                "11/09/2024",
                "RTGS OUT",
                "YESBR52024",
                "1,20,000.00",
                "",
                "3,400.00",
            ]))
            .transaction()
            .unwrap();
        assert_eq!(txn.debit, 120000.0);
        assert_eq!(txn.description, "RTGS OUT | Ref: YESBR52024");
    }
}
