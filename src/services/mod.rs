//! Service layer for the wallet
//!
//! The service layer provides ledger operations on top of the storage layer.

pub mod wallet;

pub use wallet::{Balance, Wallet};
