//! State Bank of India
//!
//! Txn Date | Value Date | Description | Ref No./Cheque No. | Branch Code |
//!   Debit | Credit | Balance.
//! Online statements spell dates `1 Apr 2024`; branch printouts use `01-04-2024`.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Sbi,
        columns: 8,
        serial: None,
        date: 0,
        date_pattern: r"\d{1,2} [A-Za-z]{3} \d{4}|\d{2}-\d{2}-\d{4}|\d{2}/\d{2}/\d{4}",
        date_formats: &["%d %b %Y", "%d-%m-%Y", "%d/%m/%Y"],
        description: 2,
        reference: Some(3),
        amounts: AmountColumns::Split { debit: 5, credit: 6 },
        balance: 7,
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
    fn test_both_date_spellings() {
        let strategy = ColumnStrategy::new(layout());
        let table = vec![
            row(&[
                "Txn Date",
                "Value Date",
                "Description",
                "Ref No./Cheque No.",
                "Branch Code",
                "Debit",
                "Credit",
                "Balance",
            ]),
            row(&[
                "1 Apr 2024",
                "1 Apr 2024",
                "BY TRANSFER-NEFT",
                "TRANSFER FROM 4897",
                "",
                "",
                "12,000.00",
                "15,250.00",
            ]),
            row(&["02-04-2024", "02-04-2024", "ATM WDL", "", "", "2,000.00", "", "13,250.00"]),
        ];
        assert!(strategy.is_transaction_table(&table));
        let txns = strategy.extract_table(&table);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(txns[0].description, "BY TRANSFER-NEFT | Ref: TRANSFER FROM 4897");
        assert_eq!(txns[0].credit, 12000.0);
        assert_eq!(txns[1].date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        assert_eq!(txns[1].debit, 2000.0);
    }
}
