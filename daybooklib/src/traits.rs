//! Чтение/запись документа поверх std::io, без привязки к файлам:
//! путь, блокировки и атомарная замена живут в `store`.

use crate::{error::Result, model::LedgerDocument};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<LedgerDocument>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, doc: &LedgerDocument) -> Result<()>;
}
