//! Дневной документ в Markdown:
//!
//! ```text
//! ### Расходы и доходы за 19.10.2026
//!
//!  ### Tags: #Spending
//! ---
//! ## *Spending:*
//!
//! | Product |  Source   |   Sum    |
//! | :-----: | :-------: | :------: |
//! | food | store | 350 |
//!
//! ---
//! ## *Income:*
//! ...
//! ```
//!
//! Чтение терпимо к ручным правкам: непонятные строки пропускаются.

use crate::{
    amount::{format_amount, parse_amount_cell},
    error::{DaybookError, Result},
    model::{Direction, LedgerDocument, LedgerRow, Section},
    parser::ATTRIBUTION_MARKER,
    traits::{ReadFormat, WriteFormat},
};
use chrono::NaiveDate;
use std::fmt::Write as FmtWrite;
use std::io::{BufRead, Write};

pub const SPENDING_MARKER: &str = "## *Spending:*";
pub const INCOME_MARKER: &str = "## *Income:*";

const TITLE_LABEL: &str = "Расходы и доходы";
const TAG_LINE: &str = " ### Tags: #Spending";
const RULE: &str = "---";
const HEADER_TOKEN: &str = "Product";
const DATE_FMT: &str = "%d.%m.%Y";

const SPENDING_HEADER: &str = "| Product |  Source   |   Sum    |";
const SPENDING_SEPARATOR: &str = "| :-----: | :-------: | :------: |";
const SPENDING_HEADER_MARKED: &str = "| Product |  Source   |   Sum    | Mark |";
const SPENDING_SEPARATOR_MARKED: &str = "| :-----: | :-------: | :------: | :--: |";

const INCOME_HEADER: &str = "| Product |  Source   |   Sum    |";
const INCOME_SEPARATOR: &str = "| :-----: | :-------: | :------: |";
const INCOME_HEADER_MARKED: &str = "| Product |  Source   |   Sum    | Mark |";
const INCOME_SEPARATOR_MARKED: &str = "| :-----: | :-------: | :------: | :--: |";

pub struct Markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Preamble,
    InSpending,
    InIncome,
}

impl ReadFormat for Markdown {
    fn read<R: BufRead>(r: R) -> Result<LedgerDocument> {
        let mut doc = LedgerDocument::default();
        let mut state = State::Preamble;

        for line in r.lines() {
            let line = line?;
            if line.contains(SPENDING_MARKER) {
                state = State::InSpending;
                continue;
            }
            if line.contains(INCOME_MARKER) {
                state = State::InIncome;
                continue;
            }

            let section = match state {
                State::Preamble => {
                    if doc.date.is_none() {
                        doc.date = parse_title_date(&line);
                    }
                    continue;
                }
                State::InSpending => &mut doc.spending,
                State::InIncome => &mut doc.income,
            };

            if !is_data_row(&line) {
                continue;
            }
            let cells = split_row(&line);
            // пустая строка-заглушка `| | | |`
            if cells.iter().all(|c| c.is_empty()) {
                continue;
            }
            match LedgerRow::from_cells(&cells) {
                Some(row) => section.push(row),
                None => tracing::debug!(line = %line, "skipping short row"),
            }
        }

        Ok(doc)
    }
}

impl WriteFormat for Markdown {
    fn write<W: Write>(mut w: W, doc: &LedgerDocument) -> Result<()> {
        let date = doc.date.ok_or(DaybookError::MissingDate)?;

        let mut s = String::new();
        let _ = writeln!(s, "### {TITLE_LABEL} за {}", date.format(DATE_FMT));
        let _ = writeln!(s);
        let _ = writeln!(s, "{TAG_LINE}");
        let _ = writeln!(s, "{RULE}");
        write_section(&mut s, Direction::Spending, &doc.spending);
        write_section(&mut s, Direction::Income, &doc.income);

        w.write_all(s.as_bytes())?;
        Ok(())
    }
}

fn table_head(direction: Direction, marked: bool) -> (&'static str, &'static str) {
    match (direction, marked) {
        (Direction::Spending, false) => (SPENDING_HEADER, SPENDING_SEPARATOR),
        (Direction::Spending, true) => (SPENDING_HEADER_MARKED, SPENDING_SEPARATOR_MARKED),
        (Direction::Income, false) => (INCOME_HEADER, INCOME_SEPARATOR),
        (Direction::Income, true) => (INCOME_HEADER_MARKED, INCOME_SEPARATOR_MARKED),
    }
}

fn write_section(s: &mut String, direction: Direction, section: &Section) {
    let marker = match direction {
        Direction::Spending => SPENDING_MARKER,
        Direction::Income => INCOME_MARKER,
    };
    let marked = section.attribution_column;
    let (header, separator) = table_head(direction, marked);

    let _ = writeln!(s, "{marker}");
    let _ = writeln!(s);
    let _ = writeln!(s, "{header}");
    let _ = writeln!(s, "{separator}");

    if section.rows.is_empty() {
        let _ = writeln!(s, "{}", "| ".repeat(section.column_count()) + "|");
    }
    for row in &section.rows {
        // нераспознанную или отрицательную сумму оставляем как написал человек
        let amount = parse_amount_cell(&row.amount)
            .filter(|a| !a.is_sign_negative())
            .map(|a| format_amount(&a))
            .unwrap_or_else(|| row.amount.clone());
        let _ = write!(s, "| {} | {} | {} |", row.product, row.source, amount);
        if marked {
            let mark = if row.attributed { ATTRIBUTION_MARKER } else { "" };
            let _ = write!(s, " {mark} |");
        }
        let _ = writeln!(s);
    }

    // после строк две пустые строки перед чертой
    let _ = writeln!(s);
    let _ = writeln!(s);
    let _ = writeln!(s, "{RULE}");
}

fn is_data_row(line: &str) -> bool {
    line.contains('|') && !line.contains(HEADER_TOKEN) && !is_separator(line)
}

// `| :-----: | :---: |` и подобные
fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '|' | ':' | '-') || c.is_whitespace())
}

fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').collect();
    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// `### Расходы и доходы за 19.10.2026` → дата.
fn parse_title_date(line: &str) -> Option<NaiveDate> {
    let title = line.trim().strip_prefix("###")?;
    let (_, date) = title.trim_end().rsplit_once(' ')?;
    NaiveDate::parse_from_str(date, DATE_FMT).ok()
}
