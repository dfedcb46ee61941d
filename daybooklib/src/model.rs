//! Доменные модели: запись из сообщения и дневной документ с двумя таблицами.

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Spending,
    Income,
}

/// Одна операция, разобранная из строки сообщения.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub product: String,
    pub source: String,
    /// Всегда неотрицательная величина, знак несёт `direction`.
    pub amount: Decimal,
    pub direction: Direction,
    pub attributed: bool,
}

/// Строка таблицы документа. Сумма хранится текстом ячейки как есть,
/// чтобы ручные правки файла переживали перезапись.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub product: String,
    pub source: String,
    pub amount: String,
    pub attributed: bool,
}

impl LedgerRow {
    /// Ячейки уже обрезаны; нужно минимум три.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        let [product, source, amount, rest @ ..] = cells else {
            return None;
        };
        Some(LedgerRow {
            product: product.clone(),
            source: source.clone(),
            amount: amount.clone(),
            attributed: rest.first().is_some_and(|m| !m.trim().is_empty()),
        })
    }
}

impl From<&TransactionRecord> for LedgerRow {
    fn from(r: &TransactionRecord) -> Self {
        LedgerRow {
            product: r.product.clone(),
            source: r.source.clone(),
            amount: r.amount.normalize().to_string(),
            attributed: r.attributed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub rows: Vec<LedgerRow>,
    /// Четвёртая колонка отметки. Раз включившись, не выключается.
    pub attribution_column: bool,
}

impl Section {
    pub fn push(&mut self, row: LedgerRow) {
        self.attribution_column |= row.attributed;
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        if self.attribution_column {
            4
        } else {
            3
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerDocument {
    pub date: Option<NaiveDate>,
    pub spending: Section,
    pub income: Section,
}

impl LedgerDocument {
    pub fn section_mut(&mut self, direction: Direction) -> &mut Section {
        match direction {
            Direction::Spending => &mut self.spending,
            Direction::Income => &mut self.income,
        }
    }
}
