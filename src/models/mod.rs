//! Core data models for the wallet
//!
//! A ledger entry is a `Transaction` tagged with a `Category`. Raw field
//! mappings (`TransactionRecord`) only become transactions after validation.

pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{
    parse_amount, parse_date, Transaction, TransactionRecord, TransactionUpdate, DATE_FORMAT,
};
