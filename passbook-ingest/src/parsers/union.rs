//! Union Bank of India
//!
//! S.No | Date | Transaction Id | Remarks | Amount(Rs.) | Balance(Rs.)
//! There is no marker column: the side is printed after the amount, `500.00 (Dr)`.

use passbook_core::{AmountDialect, BankTag};

use crate::strategy::{AmountColumns, ColumnLayout, InvalidAmount};

pub fn layout() -> ColumnLayout {
    ColumnLayout {
        bank: BankTag::Union,
        columns: 6,
        serial: Some(0),
        date: 1,
        date_pattern: r"\d{2}/\d{2}/\d{4}|\d{2}-\d{2}-\d{4}",
        date_formats: &["%d/%m/%Y", "%d-%m-%Y"],
        description: 3,
        reference: Some(2),
        amounts: AmountColumns::Suffixed { amount: 4 },
        balance: 5,
        dialect: AmountDialect::Annotated,
        invalid_amount: InvalidAmount::Reject,
        continuation: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::row;
    use crate::strategy::{ColumnStrategy, ExtractionStrategy, RowOutcome, SkipReason};

    #[test]
    fn test_suffix_decides_side() {
        let strategy = ColumnStrategy::new(layout());
        let debit = strategy
            .parse_row(&row(&[
                "1",
                "03/08/2024",
                "S1234567",
                "UPI/AMAZON",
                "500.00 (Dr)",
                "9,500.00 (Cr)",
            ]))
            .transaction()
            .unwrap();
        assert_eq!((debit.debit, debit.credit), (500.0, 0.0));
        assert_eq!(debit.balance, 9500.0);

        let credit = strategy
            .parse_row(&row(&[
                "2",
                "04/08/2024",
                "S1234599",
                "NEFT IN",
                "1,000.00(Cr)",
                "10,500.00 (Cr)",
            ]))
            .transaction()
            .unwrap();
        assert_eq!((credit.debit, credit.credit), (0.0, 1000.0));
    }

    #[test]
    fn test_missing_suffix_is_skipped() {
        let strategy = ColumnStrategy::new(layout());
        let outcome = strategy.parse_row(&row(&[
            "3",
            "05/08/2024",
            "S1",
            "???",
            "75.00",
            "10,425.00",
        ]));
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::UnknownDirection));
    }
}
