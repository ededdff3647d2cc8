//! wallet-cli - Terminal personal finance ledger
//!
//! Records income and expense entries in a JSON file and offers listing,
//! editing, searching and balance reporting through a numbered menu.
//!
//! # Architecture
//!
//! - `config`: ledger file path resolution
//! - `error`: custom error types
//! - `models`: validated transaction records
//! - `storage`: JSON file storage layer
//! - `services`: the file-backed `Wallet`
//! - `display`: terminal formatting
//! - `cli`: the interactive menu
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use wallet_cli::config::WalletPaths;
//! use wallet_cli::models::Transaction;
//! use wallet_cli::services::Wallet;
//!
//! # fn main() -> Result<(), wallet_cli::WalletError> {
//! let mut wallet = Wallet::open(WalletPaths::new(None))?;
//! let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! wallet.add(Transaction::income(date, 1000, "Salary"))?;
//! println!("Net: {}", wallet.balance().net());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WalletError, WalletResult};
