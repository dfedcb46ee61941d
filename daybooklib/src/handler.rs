//! Точка входа для транспорта: одно сообщение — ровно один ответ.

use crate::{
    error::{DaybookError, Result},
    ledger::Ledger,
};
use chrono::NaiveDate;
use std::io::Write;

pub const FORMAT_HELP: &str =
    "Invalid format! Examples:\nfood, store, 350\nsalary; job; +1000; +";

/// Канал ответа пользователю (чат, консоль, ...).
pub trait ReplyChannel {
    fn reply(&mut self, text: &str) -> Result<()>;
}

/// Ответы построчно в любой `io::Write`.
pub struct WriterReply<W: Write>(pub W);

impl<W: Write> ReplyChannel for WriterReply<W> {
    fn reply(&mut self, text: &str) -> Result<()> {
        writeln!(self.0, "{text}")?;
        self.0.flush()?;
        Ok(())
    }
}

/// Ошибки хранилища возвращаются вызывающему без ответа в канал.
pub fn handle_message<C: ReplyChannel + ?Sized>(
    ledger: &Ledger,
    text: &str,
    date: NaiveDate,
    reply: &mut C,
) -> Result<()> {
    match ledger.append(text, date) {
        Ok(report) => reply.reply(&report.to_string()),
        Err(DaybookError::NoRecords) => reply.reply(FORMAT_HELP),
        Err(e) => Err(e),
    }
}
