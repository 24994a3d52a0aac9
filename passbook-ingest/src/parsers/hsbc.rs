//! HSBC India
//!
//! The date and narration share the first cell (`01 Apr 2024 UPI/...`);
//! deposits come before withdrawals.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Hsbc,
        columns: 4,
        serial: None,
        date: 0,
        date_pattern: r"\d{1,2}\s?[A-Za-z]{3}\s?\d{4}",
        date_formats: &["%d %b %Y", "%d%b%Y"],
        description: 0,
        reference: None,
        amounts: AmountColumns::Split { debit: 2, credit: 1 },
        balance: 3,
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
    use chrono::NaiveDate;

    #[test]
    fn test_date_is_cut_from_narration() {
        let strategy = ColumnStrategy::new(layout());
        let table = vec![
            row(&["Date Transaction Details", "Deposits", "Withdrawals", "Balance"]),
            row(&["01 Apr 2024 UPI/9912/\nBOOKSTORE", "", "640.00", "18,360.00"]),
            row(&["02APR2024 INTEREST PAID", "22.10", "", "18,382.10"]),
        ];
        assert!(strategy.is_transaction_table(&table));
        let txns = strategy.extract_table(&table);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(txns[0].description, "UPI/9912/ BOOKSTORE");
        assert_eq!(txns[0].debit, 640.0);
        assert_eq!(txns[1].description, "INTEREST PAID");
        assert_eq!(txns[1].credit, 22.10);
    }
}
