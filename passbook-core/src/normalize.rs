//! Amount and date normalizers shared by every bank strategy.
//!
//! Amounts come out non-negative; the debit/credit side is decided by the
//! caller from a marker column or from which column the amount sat in.
//! Balances are the exception and keep their sign, see [`normalize_balance`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_PREFIXED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z]{1,4}\.?)?\s*₹?\s*([\d,]*\.?\d+)$").expect("currency amount pattern")
});

static ANNOTATED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^₹?\s*([\d,]*\.?\d+)\s*(?:\(\s*(?:dr|cr)\s*\)|dr|cr)?\.?$")
        .expect("annotated amount pattern")
});

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[\s(\d])(debit|credit|dr|cr|d|c)\s*\)?\.?\s*$")
        .expect("marker pattern")
});

/// Result of normalizing one amount cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Finite, non-negative
    Value(f64),
    /// Content present but not a number in this dialect
    Invalid,
}

impl Amount {
    pub fn value(self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(v),
            Amount::Invalid => None,
        }
    }
}

/// How a bank spells amounts in its table cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountDialect {
    /// `1,234.50` or `₹ 1,234.50`
    Plain,
    /// `INR1,234.50`, `Rs. 1,234.50`: a leading currency token of varying length
    CurrencyPrefixed,
    /// `1,234.50 (Dr)`, `1,234.50Cr`: a trailing side marker
    Annotated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Debit,
    Credit,
}

/// Normalize an amount cell. Absent, blank, and `-` cells are zero.
pub fn normalize_amount(raw: Option<&str>, dialect: AmountDialect) -> Amount {
    let trimmed = match raw {
        Some(s) => s.trim(),
        None => return Amount::Value(0.0),
    };
    if trimmed.is_empty() || trimmed == "-" {
        return Amount::Value(0.0);
    }

    let numeric = match dialect {
        AmountDialect::Plain => {
            let cleaned: String = trimmed
                .chars()
                .filter(|c| *c != ',' && *c != '₹' && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
                return Amount::Invalid;
            }
            cleaned
        }
        AmountDialect::CurrencyPrefixed => match CURRENCY_PREFIXED_RE.captures(trimmed) {
            Some(caps) => caps[1].replace(',', ""),
            None => return Amount::Invalid,
        },
        AmountDialect::Annotated => match ANNOTATED_RE.captures(trimmed) {
            Some(caps) => caps[1].replace(',', ""),
            None => return Amount::Invalid,
        },
    };

    match numeric.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Amount::Value(v),
        _ => Amount::Invalid,
    }
}

/// Normalize a running-balance cell, keeping its sign.
///
/// An overdrawn balance is printed as `-500.00`, `500.00-` or `500.00 Dr`
/// and comes out negative. Blank cells are zero; `None` means the cell holds
/// something that is not a balance in this dialect.
pub fn normalize_balance(raw: Option<&str>, dialect: AmountDialect) -> Option<f64> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() || trimmed == "-" {
        return Some(0.0);
    }

    let (minus, body) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = trimmed.strip_suffix('-') {
        (true, rest.trim_end())
    } else {
        (false, trimmed)
    };
    if body.is_empty() {
        return None;
    }

    let marker = direction_marker(body);
    let magnitude = match normalize_amount(Some(body), dialect) {
        Amount::Value(v) => v,
        Amount::Invalid if marker.is_some() => {
            normalize_amount(Some(body), AmountDialect::Annotated).value()?
        }
        Amount::Invalid => return None,
    };

    let overdrawn = minus || marker == Some(Direction::Debit);
    Some(if overdrawn && magnitude != 0.0 { -magnitude } else { magnitude })
}

/// Read a debit/credit marker from a marker cell or from an annotated amount.
pub fn direction_marker(raw: &str) -> Option<Direction> {
    let caps = MARKER_RE.captures(raw.trim())?;
    match caps[1].to_ascii_lowercase().as_str() {
        "dr" | "d" | "debit" => Some(Direction::Debit),
        "cr" | "c" | "credit" => Some(Direction::Credit),
        _ => None,
    }
}

/// Parse a date using only the formats the issuing bank is known to print.
///
/// Numeric formats are ambiguous between day-first and month-first, so there
/// is deliberately no global fallback list.
pub fn normalize_date(raw: &str, formats: &[&str]) -> Option<NaiveDate> {
    let folded = fold_whitespace(raw);
    if folded.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&folded, fmt).ok())
}

/// Collapse newlines and runs of whitespace into single spaces.
pub fn fold_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
