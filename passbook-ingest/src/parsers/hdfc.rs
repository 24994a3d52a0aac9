//! HDFC Bank
//!
//! Date | Narration | Chq./Ref.No. | Value Dt | Withdrawal Amt. | Deposit Amt. | Closing Balance
//! with two-digit years (`01/04/24`).

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Hdfc,
        columns: 7,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}/\d{2}/\d{2,4}",
        date_formats: &["%d/%m/%y", "%d/%m/%Y"],
        description: 1,
        reference: Some(2),
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
    use crate::strategy::{ColumnStrategy, ExtractionStrategy, RowOutcome, SkipReason};
    use chrono::NaiveDate;

    #[test]
    fn test_withdrawal_row() {
        let strategy = ColumnStrategy::new(layout());
        let txn = strategy
            .parse_row(&row(&[
                "05/04/24",
                "POS 4591XXXX FUEL",
                "0000409512",
                "05/04/24",
                "2,100.00",
                "",
                "31,420.10",
            ]))
            .transaction()
            .unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 4, 5).unwrap());
        assert_eq!(txn.description, "POS 4591XXXX FUEL | Ref: 0000409512");
        assert_eq!(txn.debit, 2100.0);
        assert_eq!(txn.credit, 0.0);
    }

    #[test]
    fn test_garbled_amount_rejects_row() {
        let strategy = ColumnStrategy::new(layout());
        let outcome = strategy.parse_row(&row(&[
            "05/04/24",
            "X",
            "",
            "05/04/24",
            "2,1OO.00",
            "",
            "31,420.10",
        ]));
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::InvalidAmount));
    }
}
