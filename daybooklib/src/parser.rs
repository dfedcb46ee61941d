//! Разбор сообщения пользователя в записи.
//!
//! Диалект A: `товар, источник, сумма[, +]`; запятая между цифрами — дробная.
//! Диалект B: `товар; источник; сумма[; +]`.
//! Сумма с `+` впереди — доход, без него — расход. Строки с ошибкой
//! пропускаются, остальные разбираются дальше.

use crate::{
    error::{DaybookError, Result},
    model::{Direction, TransactionRecord},
};
use rust_decimal::Decimal;

/// Четвёртое поле, включающее отметку.
pub const ATTRIBUTION_MARKER: &str = "+";

pub fn parse_message(text: &str) -> Vec<TransactionRecord> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_line(line) {
            Ok(rec) => Some(rec),
            Err(e) => {
                tracing::debug!(line, "skipping line: {e}");
                None
            }
        })
        .collect()
}

pub fn parse_line(line: &str) -> Result<TransactionRecord> {
    let comma_dialect = !line.contains(';');
    let fields: Vec<&str> = if comma_dialect {
        split_commas(line)
    } else {
        line.split(';').map(str::trim).collect()
    };

    let [product, source, amount, rest @ ..] = fields.as_slice() else {
        return Err(DaybookError::Parse(format!(
            "expected at least 3 fields, got {}",
            fields.len()
        )));
    };
    // в диалекте A лишнее поле допустимо только как отметка
    let stray_field = rest.len() > 1 || rest.first().is_some_and(|m| *m != ATTRIBUTION_MARKER);
    if comma_dialect && stray_field {
        return Err(DaybookError::Parse(format!(
            "expected 3 fields or a trailing marker, got {}",
            fields.len()
        )));
    }
    if product.is_empty() || source.is_empty() {
        return Err(DaybookError::Parse("empty product or source".into()));
    }

    let (amount, direction) = parse_amount(amount)?;

    Ok(TransactionRecord {
        product: product.to_string(),
        source: source.to_string(),
        amount,
        direction,
        attributed: rest.first().is_some_and(|m| *m == ATTRIBUTION_MARKER),
    })
}

/// Делит по запятым, кроме стоящих вплотную между цифрами (`10,5`).
fn split_commas(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b != b',' {
            continue;
        }
        let decimal = i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !decimal {
            fields.push(line[start..i].trim());
            start = i + 1;
        }
    }
    fields.push(line[start..].trim());
    fields
}

fn parse_amount(text: &str) -> Result<(Decimal, Direction)> {
    let direction = if text.starts_with('+') {
        Direction::Income
    } else {
        Direction::Spending
    };

    let plain: String = text
        .chars()
        .filter(|c| *c != '+' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let amount: Decimal = plain
        .parse()
        .map_err(|e| DaybookError::Parse(format!("amount {text:?}: {e}")))?;

    Ok((amount.abs(), direction))
}
