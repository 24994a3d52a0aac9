//! Date-window selection over parsed transactions.

use chrono::NaiveDate;
use passbook_core::Transaction;

/// Transactions dated within `[from, to]`, both ends inclusive and either
/// end open when `None`. Document order is kept.
pub fn within_period(
    txns: &[Transaction],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&Transaction> {
    txns.iter()
        .filter(|t| from.is_none_or(|from| t.date >= from))
        .filter(|t| to.is_none_or(|to| t.date <= to))
        .collect()
}
