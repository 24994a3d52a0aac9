//! Table detection and row parsing shared by the per-bank parsers.
//!
//! A bank describes its transaction table once as a [`ColumnLayout`];
//! [`ColumnStrategy`] turns that description into the two operations the
//! orchestrator needs. Row problems are returned as [`RowOutcome::Skipped`]
//! values, never as errors: blank, sub-header and summary rows are routine.
//! Documents without extracted tables are rebuilt into tables from their
//! positioned text lines, sliced by the columns of the bank's header line.

use once_cell::sync::OnceCell;
use passbook_core::{
    Amount, AmountDialect, BankTag, Direction, Transaction, direction_marker, fold_whitespace,
    normalize_amount, normalize_balance, normalize_date, signature,
};
use regex::Regex;
use tracing::{trace, warn};

use crate::document::{Row, Table};
use crate::lines::{ColumnGrid, TextLine};

/// Joins a narration and the reference/cheque number split into its own column.
pub const REFERENCE_SEPARATOR: &str = " | Ref: ";

/// A wrapped narration line sits at most this many line heights below the row it continues
const WRAP_SPACING: f64 = 1.8;

/// Why a row did not become a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Header,
    InvalidSerial,
    InvalidDate,
    InvalidAmount,
    InvalidBalance,
    /// Non-zero amount whose marker is neither debit nor credit
    UnknownDirection,
    /// Both the debit and the credit column carry an amount
    AmbiguousDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Parsed(Transaction),
    Skipped(SkipReason),
}

impl RowOutcome {
    pub fn transaction(self) -> Option<Transaction> {
        match self {
            RowOutcome::Parsed(txn) => Some(txn),
            RowOutcome::Skipped(_) => None,
        }
    }
}

/// Per-bank table detection and row parsing.
pub trait ExtractionStrategy: Send + Sync {
    fn bank(&self) -> BankTag;

    /// Whether a table extracted from a page holds this bank's transactions
    fn is_transaction_table(&self, table: &Table) -> bool;

    /// Whether a row is this bank's header row
    fn is_header_row(&self, row: &[Option<String>]) -> bool;

    fn parse_row(&self, row: &[Option<String>]) -> RowOutcome;

    /// Rebuild this bank's transaction tables from a page's text lines.
    ///
    /// `grid` holds the columns of the last header seen and carries them into
    /// the next page, where header-less continuation tables need them.
    fn tables_from_lines(&self, lines: &[TextLine], grid: &mut Option<ColumnGrid>) -> Vec<Table>;

    /// Parse every row of a qualifying table, in row order.
    fn extract_table(&self, table: &Table) -> Vec<Transaction> {
        let start = match table.first() {
            Some(first) if self.is_header_row(first) => 1,
            _ => 0,
        };

        table[start.min(table.len())..]
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| match self.parse_row(row) {
                RowOutcome::Parsed(txn) => Some(txn),
                RowOutcome::Skipped(reason) => {
                    trace!(bank = %self.bank(), row = idx + start, ?reason, "row skipped");
                    None
                }
            })
            .collect()
    }
}

/// Where the debit/credit side of a row comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountColumns {
    /// One amount column plus a `DR`/`CR` marker column
    Marker { amount: usize, marker: usize },
    /// Separate withdrawal and deposit columns
    Split { debit: usize, credit: usize },
    /// One amount column whose cell carries the marker, e.g. `500.00 (Dr)`
    Suffixed { amount: usize },
}

/// What to do with an amount cell that is present but unparseable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAmount {
    Reject,
    Zero,
}

/// Fixed column positions and dialects of one bank's transaction table.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub bank: BankTag,
    /// Short rows are padded with empty cells up to this width
    pub columns: usize,
    /// Column that must hold an integer row number, when the bank prints one
    pub serial: Option<usize>,
    pub date: usize,
    /// Matches the date at the start of the date cell; doubles as the row discriminator
    pub date_pattern: &'static str,
    pub date_formats: &'static [&'static str],
    /// May equal `date`, in which case the matched date text is cut out of the narration
    pub description: usize,
    pub reference: Option<usize>,
    pub amounts: AmountColumns,
    pub balance: usize,
    pub dialect: AmountDialect,
    pub invalid_amount: InvalidAmount,
    /// Accept header-less tables whose first row already looks like a transaction
    pub continuation: bool,
}

/// Minimum header hits for a table to qualify: two thirds of a wide
/// vocabulary, a strict majority of a narrow one.
pub fn header_threshold(expected: usize) -> usize {
    if expected >= 6 {
        (expected * 2).div_ceil(3)
    } else {
        expected / 2 + 1
    }
}

/// A [`ColumnLayout`] paired with the bank's header vocabulary from the catalog.
#[derive(Debug)]
pub struct ColumnStrategy {
    layout: ColumnLayout,
    headers: Vec<String>,
    min_header_matches: usize,
    date_re: OnceCell<Regex>,
}

impl ColumnStrategy {
    pub fn new(layout: ColumnLayout) -> Self {
        let headers: Vec<String> = signature(layout.bank)
            .headers
            .iter()
            .map(|h| h.to_lowercase())
            .collect();
        let min_header_matches = header_threshold(headers.len());
        Self {
            layout,
            headers,
            min_header_matches,
            date_re: OnceCell::new(),
        }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn min_header_matches(&self) -> usize {
        self.min_header_matches
    }

    fn date_re(&self) -> &Regex {
        self.date_re.get_or_init(|| {
            Regex::new(&format!("^(?:{})", self.layout.date_pattern)).expect("layout date pattern")
        })
    }

    /// Number of expected headers found as a substring of some cell
    pub fn header_matches(&self, row: &[Option<String>]) -> usize {
        let cells: Vec<String> = row
            .iter()
            .map(|c| c.as_deref().unwrap_or("").trim().to_lowercase())
            .collect();
        self.headers
            .iter()
            .filter(|header| cells.iter().any(|cell| cell.contains(header.as_str())))
            .count()
    }

    fn looks_like_transaction(&self, row: &[Option<String>]) -> bool {
        let cell = |idx: usize| row.get(idx).and_then(|c| c.as_deref()).unwrap_or("").trim();
        if let Some(serial) = self.layout.serial {
            if cell(serial).parse::<u64>().is_err() {
                return false;
            }
        }
        self.date_re().is_match(cell(self.layout.date))
    }

    /// Columns holding figures rather than text
    fn figure_columns(&self) -> Vec<usize> {
        let mut columns = vec![self.layout.balance];
        match self.layout.amounts {
            AmountColumns::Marker { amount, marker } => columns.extend([amount, marker]),
            AmountColumns::Split { debit, credit } => columns.extend([debit, credit]),
            AmountColumns::Suffixed { amount } => columns.push(amount),
        }
        columns.extend(self.layout.serial);
        columns
    }

    /// Whether `row` only continues the cells of `previous`: no date of its
    /// own and nothing in the figure columns, below a row that has a date or
    /// figures (a date may itself wrap, as in `June30,` over `2025`).
    fn is_wrapped_line(&self, previous: &Row, row: &Row) -> bool {
        let cell = |r: &Row, idx: usize| {
            r.get(idx)
                .and_then(|c| c.as_deref())
                .map(fold_whitespace)
                .unwrap_or_default()
        };
        let date = self.layout.date;
        let figures = self.figure_columns();
        let previous_is_entry = self.date_re().is_match(&cell(previous, date))
            || figures.iter().any(|&idx| !cell(previous, idx).is_empty());
        previous_is_entry
            && !self.date_re().is_match(&cell(row, date))
            && figures.iter().all(|&idx| cell(row, idx).is_empty())
    }

    fn amount(&self, raw: &str) -> Option<f64> {
        match normalize_amount(Some(raw), self.layout.dialect) {
            Amount::Value(v) => Some(v),
            Amount::Invalid => match self.layout.invalid_amount {
                InvalidAmount::Zero => Some(0.0),
                InvalidAmount::Reject => None,
            },
        }
    }

    /// Balances may be negative on overdrawn accounts.
    fn balance(&self, raw: &str) -> Option<f64> {
        normalize_balance(Some(raw), self.layout.dialect).or(match self.layout.invalid_amount {
            InvalidAmount::Zero => Some(0.0),
            InvalidAmount::Reject => None,
        })
    }

    fn sides(&self, cells: &[String]) -> Result<(f64, f64), SkipReason> {
        let sided = |amount: f64, direction: Option<Direction>| match direction {
            Some(Direction::Debit) => Ok((amount, 0.0)),
            Some(Direction::Credit) => Ok((0.0, amount)),
            None if amount == 0.0 => Ok((0.0, 0.0)),
            None => Err(SkipReason::UnknownDirection),
        };

        match self.layout.amounts {
            AmountColumns::Marker { amount, marker } => {
                let value = self.amount(&cells[amount]).ok_or(SkipReason::InvalidAmount)?;
                sided(value, direction_marker(&cells[marker]))
            }
            AmountColumns::Suffixed { amount } => {
                let value = self.amount(&cells[amount]).ok_or(SkipReason::InvalidAmount)?;
                sided(value, direction_marker(&cells[amount]))
            }
            AmountColumns::Split { debit, credit } => {
                let debit = self.amount(&cells[debit]).ok_or(SkipReason::InvalidAmount)?;
                let credit = self.amount(&cells[credit]).ok_or(SkipReason::InvalidAmount)?;
                if debit > 0.0 && credit > 0.0 {
                    return Err(SkipReason::AmbiguousDirection);
                }
                Ok((debit, credit))
            }
        }
    }

    fn parse_cells(&self, row: &[Option<String>]) -> Result<Transaction, SkipReason> {
        let layout = &self.layout;
        let mut cells: Vec<String> = row
            .iter()
            .map(|c| c.as_deref().unwrap_or("").trim().to_string())
            .collect();
        if cells.iter().all(|c| c.is_empty()) {
            return Err(SkipReason::Blank);
        }
        if cells.len() < layout.columns {
            cells.resize(layout.columns, String::new());
        }

        if let Some(serial) = layout.serial {
            cells[serial]
                .parse::<u64>()
                .map_err(|_| SkipReason::InvalidSerial)?;
        }

        let date_cell = fold_whitespace(&cells[layout.date]);
        let date_match = self.date_re().find(&date_cell).ok_or(SkipReason::InvalidDate)?;
        let date = normalize_date(date_match.as_str(), layout.date_formats)
            .ok_or(SkipReason::InvalidDate)?;

        let (debit, credit) = self.sides(&cells)?;
        let balance = self.balance(&cells[layout.balance]).ok_or(SkipReason::InvalidBalance)?;

        let mut description = if layout.description == layout.date {
            let mut rest = date_cell.clone();
            rest.replace_range(date_match.range(), "");
            fold_whitespace(&rest)
        } else {
            fold_whitespace(&cells[layout.description])
        };
        if let Some(reference) = layout.reference {
            let reference = fold_whitespace(&cells[reference]);
            if !reference.is_empty() && reference != "-" {
                description.push_str(REFERENCE_SEPARATOR);
                description.push_str(&reference);
            }
        }

        Ok(Transaction {
            date,
            description,
            debit,
            credit,
            balance,
            bank_name: layout.bank,
        })
    }
}

impl ExtractionStrategy for ColumnStrategy {
    fn bank(&self) -> BankTag {
        self.layout.bank
    }

    fn is_transaction_table(&self, table: &Table) -> bool {
        let Some(first) = table.first() else {
            return false;
        };
        if first.iter().all(|c| c.as_deref().is_none_or(|s| s.trim().is_empty())) {
            return false;
        }
        if !self.headers.is_empty() && self.header_matches(first) >= self.min_header_matches {
            return true;
        }
        self.layout.continuation && self.looks_like_transaction(first)
    }

    fn is_header_row(&self, row: &[Option<String>]) -> bool {
        !self.headers.is_empty() && self.header_matches(row) >= self.min_header_matches
    }

    fn parse_row(&self, row: &[Option<String>]) -> RowOutcome {
        if self.is_header_row(row) {
            return RowOutcome::Skipped(SkipReason::Header);
        }
        match self.parse_cells(row) {
            Ok(txn) => RowOutcome::Parsed(txn),
            Err(reason) => RowOutcome::Skipped(reason),
        }
    }

    fn tables_from_lines(&self, lines: &[TextLine], grid: &mut Option<ColumnGrid>) -> Vec<Table> {
        let mut tables = Vec::new();
        let mut current: Option<Table> = None;
        let mut previous: Option<&TextLine> = None;

        for line in lines {
            if self.is_header_row(&line.cells()) {
                tables.extend(current.take());
                let header = ColumnGrid::from_header(line);
                if header.width() < self.layout.columns {
                    warn!(
                        bank = %self.bank(),
                        found = header.width(),
                        expected = self.layout.columns,
                        "header line does not span the table's columns; table skipped"
                    );
                    *grid = None;
                    continue;
                }
                current = Some(vec![header.slice(line)]);
                *grid = Some(header);
                previous = Some(line);
                continue;
            }

            let Some(columns) = grid.as_ref() else {
                continue;
            };
            if current.is_none() {
                if !self.layout.continuation {
                    continue;
                }
                current = Some(Vec::new());
            }
            let Some(table) = current.as_mut() else {
                continue;
            };

            let row = columns.slice(line);
            let adjacent = previous
                .is_some_and(|p| line.y - p.y <= WRAP_SPACING * line.height.max(p.height));
            match table.last_mut() {
                Some(last) if adjacent && self.is_wrapped_line(last, &row) => {
                    for (cell, extra) in last.iter_mut().zip(row) {
                        let Some(extra) = extra else {
                            continue;
                        };
                        match cell {
                            Some(text) => {
                                text.push('\n');
                                text.push_str(&extra);
                            }
                            None => *cell = Some(extra),
                        }
                    }
                }
                _ => table.push(row),
            }
            previous = Some(line);
        }

        tables.extend(current);
        tables
    }
}
