//! Canonical transaction record and per-document parse result

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bank tag reported when no catalog signature matched (or no strategy is registered).
pub const UNKNOWN_BANK: &str = "UNKNOWN";

/// Catalog tag of an issuing bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankTag {
    Axis,
    Idbi,
    Iob,
    Indian,
    Sbi,
    Jk,
    Federal,
    Union,
    Hsbc,
    Bandhan,
    Yes,
    Bob,
    Hdfc,
    Pnb,
    Cbi,
    Karnataka,
    Kotak,
    Canara,
    Indusind,
}

impl BankTag {
    pub const ALL: [BankTag; 19] = [
        BankTag::Axis,
        BankTag::Idbi,
        BankTag::Iob,
        BankTag::Indian,
        BankTag::Sbi,
        BankTag::Jk,
        BankTag::Federal,
        BankTag::Union,
        BankTag::Hsbc,
        BankTag::Bandhan,
        BankTag::Yes,
        BankTag::Bob,
        BankTag::Hdfc,
        BankTag::Pnb,
        BankTag::Cbi,
        BankTag::Karnataka,
        BankTag::Kotak,
        BankTag::Canara,
        BankTag::Indusind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BankTag::Axis => "AXIS",
            BankTag::Idbi => "IDBI",
            BankTag::Iob => "IOB",
            BankTag::Indian => "INDIAN",
            BankTag::Sbi => "SBI",
            BankTag::Jk => "JK",
            BankTag::Federal => "FEDERAL",
            BankTag::Union => "UNION",
            BankTag::Hsbc => "HSBC",
            BankTag::Bandhan => "BANDHAN",
            BankTag::Yes => "YES",
            BankTag::Bob => "BOB",
            BankTag::Hdfc => "HDFC",
            BankTag::Pnb => "PNB",
            BankTag::Cbi => "CBI",
            BankTag::Karnataka => "KARNATAKA",
            BankTag::Kotak => "KOTAK",
            BankTag::Canara => "CANARA",
            BankTag::Indusind => "INDUSIND",
        }
    }
}

impl fmt::Display for BankTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BankTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BankTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown bank tag: {wanted}"))
    }
}

/// Normalized, bank-agnostic statement row.
///
/// Strategies only emit rows where at most one of `debit`/`credit` is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Single-line narration; a split-off reference is appended after `" | Ref: "`
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    /// Running balance as printed on the statement
    pub balance: f64,
    pub bank_name: BankTag,
}

impl Transaction {
    /// `debit >= 0 && credit >= 0 && !(debit > 0 && credit > 0)`
    pub fn is_consistent(&self) -> bool {
        self.debit >= 0.0 && self.credit >= 0.0 && !(self.debit > 0.0 && self.credit > 0.0)
    }

    /// Positive for credits, negative for debits
    pub fn net_amount(&self) -> f64 {
        self.credit - self.debit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementMetadata {
    pub account_number: Option<String>,
    /// Only set when the statement prints it and the bank registers a pattern for it
    pub opening_balance: Option<f64>,
    pub parsed_at: DateTime<Utc>,
}

/// Output of one parse call. `bank_name` is a catalog tag or `UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub bank_name: String,
    pub total_transactions: usize,
    pub transactions: Vec<Transaction>,
    pub metadata: StatementMetadata,
}

impl ParseResult {
    pub fn identified(
        bank: BankTag,
        transactions: Vec<Transaction>,
        metadata: StatementMetadata,
    ) -> Self {
        Self {
            bank_name: bank.as_str().to_string(),
            total_transactions: transactions.len(),
            transactions,
            metadata,
        }
    }

    pub fn unknown(parsed_at: DateTime<Utc>) -> Self {
        Self {
            bank_name: UNKNOWN_BANK.to_string(),
            total_transactions: 0,
            transactions: Vec::new(),
            metadata: StatementMetadata {
                account_number: None,
                opening_balance: None,
                parsed_at,
            },
        }
    }

    pub fn is_identified(&self) -> bool {
        self.bank_name != UNKNOWN_BANK
    }

    pub fn bank(&self) -> Option<BankTag> {
        self.bank_name.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            description: "Sample Payment".to_string(),
            debit: 1500.0,
            credit: 0.0,
            balance: 8500.0,
            bank_name: BankTag::Axis,
        }
    }

    #[test]
    fn test_bank_tag_round_trips_through_str() {
        for tag in BankTag::ALL {
            assert_eq!(tag.as_str().parse::<BankTag>(), Ok(tag));
        }
        assert_eq!("hdfc".parse::<BankTag>(), Ok(BankTag::Hdfc));
        assert!("ICICI".parse::<BankTag>().is_err());
    }

    #[test]
    fn test_transaction_serializes_canonical_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2024-04-01");
        assert_eq!(json["bank_name"], "AXIS");
        assert_eq!(json["debit"], 1500.0);
    }

    #[test]
    fn test_consistency_rejects_double_sided_rows() {
        let mut txn = sample();
        assert!(txn.is_consistent());
        txn.credit = 10.0;
        assert!(!txn.is_consistent());
        assert_eq!(sample().net_amount(), -1500.0);
    }

    #[test]
    fn test_unknown_result_is_empty() {
        let at = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();
        let result = ParseResult::unknown(at);
        assert_eq!(result.bank_name, UNKNOWN_BANK);
        assert_eq!(result.total_transactions, 0);
        assert!(result.transactions.is_empty());
        assert!(result.metadata.account_number.is_none());
        assert!(!result.is_identified());
        assert_eq!(result.bank(), None);
    }

    #[test]
    fn test_identified_counts_transactions() {
        let at = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();
        let meta = StatementMetadata {
            account_number: Some("9120".to_string()),
            opening_balance: None,
            parsed_at: at,
        };
        let result = ParseResult::identified(BankTag::Axis, vec![sample(), sample()], meta);
        assert_eq!(result.total_transactions, 2);
        assert_eq!(result.bank(), Some(BankTag::Axis));
    }
}
