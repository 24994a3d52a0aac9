//! CSV ledger export, one row per transaction in document order.

use anyhow::{Context, Result};
use passbook_core::Transaction;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 6] = ["Date", "Description", "Debit", "Credit", "Balance", "Bank"];

/// Write transactions as CSV. Dates are ISO `YYYY-MM-DD`, amounts carry two decimals.
pub fn write_csv<W: Write>(writer: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for txn in txns {
        wtr.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            format!("{:.2}", txn.debit),
            format!("{:.2}", txn.credit),
            format!("{:.2}", txn.balance),
            txn.bank_name.to_string(),
        ])?;
    }

    wtr.flush().context("flushing csv output")?;
    Ok(())
}

pub fn write_csv_file(path: impl AsRef<Path>, txns: &[Transaction]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, txns).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use passbook_core::BankTag;

    fn txn(description: &str, debit: f64, credit: f64, balance: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            description: description.to_string(),
            debit,
            credit,
            balance,
            bank_name: BankTag::Axis,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let mut out = Vec::new();
        write_csv(&mut out, &[txn("Sample Payment", 1500.0, 0.0, 8500.0)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Description,Debit,Credit,Balance,Bank");
        assert_eq!(lines[1], "2024-04-01,Sample Payment,1500.00,0.00,8500.00,AXIS");
    }

    #[test]
    fn test_descriptions_with_commas_are_quoted() {
        let mut out = Vec::new();
        write_csv(&mut out, &[txn("NEFT, ACME | Ref: 77", 0.0, 10.5, 20.0)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"NEFT, ACME | Ref: 77\""), "{text}");
    }

    #[test]
    fn test_empty_ledger_is_header_only() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Date,Description,Debit,Credit,Balance,Bank\n");
    }
}
