//! Слияние новых записей с документом текущего дня.

use crate::{
    error::{DaybookError, Result},
    locks::{self, PathLocks},
    model::{LedgerDocument, LedgerRow, TransactionRecord},
    parser::parse_message,
    path::resolve_day_path,
    store,
};
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

/// Настройки, собранные один раз при старте.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Корень хранилища, внутри `YYYY/MM_Month/`.
    pub vault: PathBuf,
}

impl Config {
    pub fn new(vault: impl Into<PathBuf>) -> Self {
        Config { vault: vault.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub path: PathBuf,
    pub file_name: String,
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} records to {}", self.added, self.file_name)
    }
}

#[derive(Debug)]
pub struct Ledger {
    config: Config,
    locks: PathLocks,
}

impl Ledger {
    pub fn new(config: Config) -> Self {
        Ledger {
            config,
            locks: PathLocks::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Разбирает `text` и дописывает записи в документ за `date`.
    ///
    /// Если ни одна строка не разобралась, возвращает
    /// [`DaybookError::NoRecords`] и файлов не трогает.
    pub fn append(&self, text: &str, date: NaiveDate) -> Result<MergeReport> {
        let records = parse_message(text);
        if records.is_empty() {
            return Err(DaybookError::NoRecords);
        }

        let path = resolve_day_path(&self.config.vault, date)?;
        let lock = self.locks.lock_for(&path);
        let _guard = locks::acquire(&lock);

        let mut doc = store::load(&path)?;
        merge_records(&mut doc, &records);
        doc.date = Some(date);
        store::save(&path, &doc)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::info!(
            added = records.len(),
            file = %path.display(),
            "appended records"
        );

        Ok(MergeReport {
            added: records.len(),
            path,
            file_name,
        })
    }
}

/// Новые строки идут в хвост своей таблицы в порядке сообщения.
pub fn merge_records(doc: &mut LedgerDocument, records: &[TransactionRecord]) {
    for rec in records {
        doc.section_mut(rec.direction).push(LedgerRow::from(rec));
    }
}
