//! Per-statement totals for dashboards and reports.

use chrono::NaiveDate;
use passbook_core::{ParseResult, Transaction};
use serde::{Deserialize, Serialize};

/// Aggregate view of one statement's transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub transaction_count: usize,
    pub total_debit: f64,
    pub total_credit: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Balance after the last row in document order
    pub closing_balance: Option<f64>,
    pub opening_balance: Option<f64>,
    /// True when `opening_balance` was worked back from the first row rather
    /// than printed on the statement
    pub opening_balance_derived: bool,
}

impl StatementSummary {
    /// Summarize transactions in document order. The opening balance is
    /// derived from the first row as `balance - credit + debit`.
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let total_debit: f64 = txns.iter().map(|t| t.debit).sum();
        let total_credit: f64 = txns.iter().map(|t| t.credit).sum();

        let first = txns.first();
        let opening_balance = first.map(|t| t.balance - t.credit + t.debit);

        Self {
            transaction_count: txns.len(),
            total_debit,
            total_credit,
            first_date: txns.iter().map(|t| t.date).min(),
            last_date: txns.iter().map(|t| t.date).max(),
            closing_balance: txns.last().map(|t| t.balance),
            opening_balance,
            opening_balance_derived: opening_balance.is_some(),
        }
    }

    /// Summarize a parse result, preferring the printed opening balance
    /// from the statement metadata over the derived one.
    pub fn from_result(result: &ParseResult) -> Self {
        let mut summary = Self::from_transactions(&result.transactions);
        if let Some(printed) = result.metadata.opening_balance {
            summary.opening_balance = Some(printed);
            summary.opening_balance_derived = false;
        }
        summary
    }

    /// Credits minus debits over the statement
    pub fn net_change(&self) -> f64 {
        self.total_credit - self.total_debit
    }
}
