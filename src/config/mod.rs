//! Configuration module for the wallet
//!
//! The only configurable value is where the ledger file lives.

pub mod paths;

pub use paths::WalletPaths;
