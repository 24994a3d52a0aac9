//! Human-readable statement tables for the terminal.

use anyhow::Result;
use chrono_tz::Tz;
use passbook_core::ParseResult;
use passbook_export::StatementSummary;
use std::io::Write;

const DESCRIPTION_WIDTH: usize = 40;

/// Cut to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

pub fn render_table<W: Write>(
    out: &mut W,
    source: &str,
    result: &ParseResult,
    tz: Tz,
) -> Result<()> {
    let parsed_at = result.metadata.parsed_at.with_timezone(&tz);
    writeln!(out, "== {source}")?;

    if !result.is_identified() {
        writeln!(out, "{}  no supported bank signature found", result.bank_name)?;
        return Ok(());
    }

    writeln!(
        out,
        "{}  account {}  parsed {}  ({} transactions)",
        result.bank_name,
        result.metadata.account_number.as_deref().unwrap_or("-"),
        parsed_at.format("%Y-%m-%d %H:%M %Z"),
        result.total_transactions
    )?;
    writeln!(
        out,
        "{:<10}  {:<width$}  {:>12}  {:>12}  {:>14}",
        "Date",
        "Description",
        "Debit",
        "Credit",
        "Balance",
        width = DESCRIPTION_WIDTH
    )?;
    for t in &result.transactions {
        writeln!(
            out,
            "{:<10}  {:<width$}  {:>12.2}  {:>12.2}  {:>14.2}",
            t.date.format("%Y-%m-%d"),
            truncate(&t.description, DESCRIPTION_WIDTH),
            t.debit,
            t.credit,
            t.balance,
            width = DESCRIPTION_WIDTH
        )?;
    }

    let summary = StatementSummary::from_result(result);
    let opening = match (summary.opening_balance, summary.opening_balance_derived) {
        (Some(v), true) => format!("{v:.2} (derived)"),
        (Some(v), false) => format!("{v:.2}"),
        (None, _) => "-".to_string(),
    };
    writeln!(
        out,
        "opening {} | debits {:.2} | credits {:.2} | closing {}",
        opening,
        summary.total_debit,
        summary.total_credit,
        summary
            .closing_balance
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "-".to_string())
    )?;
    Ok(())
}
