//! daybooklib — дневные таблицы расходов и доходов в Markdown: разбор
//! сообщений, чтение/запись документа и дописывание новых строк.

pub mod amount;
pub mod error;
pub mod handler;
pub mod ledger;
pub mod locks;
pub mod model;
pub mod parser;
pub mod path;
pub mod store;
pub mod traits;

pub mod formats {
    pub mod markdown;
}
