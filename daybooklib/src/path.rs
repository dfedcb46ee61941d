//! Раскладка хранилища: `root/YYYY/MM_Month/DD.MM.YYYY.md`.

use crate::error::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCUMENT_EXT: &str = "md";

/// Путь к документу дня без обращения к файловой системе.
pub fn day_path(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%Y").to_string())
        .join(date.format("%m_%B").to_string())
        .join(format!("{}.{DOCUMENT_EXT}", date.format("%d.%m.%Y")))
}

/// То же, что `day_path`, но ещё создаёт недостающие каталоги.
/// Повторный вызов и гонка с другим процессом не ошибка.
pub fn resolve_day_path(root: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = day_path(root, date);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(path)
}
