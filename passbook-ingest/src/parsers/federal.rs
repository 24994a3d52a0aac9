//! Federal Bank
//!
//! Date | Value Date | Particulars | Tran Type | Tran ID | Withdrawals | Deposits | Balance

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Federal,
        columns: 8,
        serial: None,
        date: 0,
        date_pattern: r"\d{2}-\d{2}-\d{4}|\d{2}/\d{2}/\d{4}",
        date_formats: &["%d-%m-%Y", "%d/%m/%Y"],
        description: 2,
        reference: Some(4),
        amounts: AmountColumns::Split { debit: 5, credit: 6 },
        balance: 7,
        dialect: AmountDialect::Annotated,
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
    fn test_tran_id_becomes_reference() {
        let strategy = ColumnStrategy::new(layout());
        let txn = strategy
            .parse_row(&row(&[
                "20-07-2024",
                "20-07-2024",
                "SALARY JUL",
                "TFR",
                "S81230",
                "",
                "61,000.00",
                "75,400.00Cr",
            ]))
            .transaction()
            .unwrap();
        assert_eq!(txn.description, "SALARY JUL | Ref: S81230");
        assert_eq!(txn.credit, 61000.0);
        assert_eq!(txn.balance, 75400.0);
    }
}
