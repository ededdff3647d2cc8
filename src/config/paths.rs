//! Path management for the wallet
//!
//! ## Path Resolution Order
//!
//! 1. Explicit path passed on the command line
//! 2. `WALLET_FILE` environment variable (if set)
//! 3. `transactions.json` in the current directory

use std::path::{Path, PathBuf};

use crate::error::WalletError;

/// Environment variable naming the ledger file
pub const LEDGER_FILE_ENV: &str = "WALLET_FILE";

/// Default ledger file name, relative to the working directory
pub const DEFAULT_LEDGER_FILE: &str = "transactions.json";

/// Resolves the file the ledger is mirrored to
#[derive(Debug, Clone)]
pub struct WalletPaths {
    ledger_file: PathBuf,
}

impl WalletPaths {
    /// Resolve paths from an optional explicit override
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let ledger_file = explicit
            .or_else(|| std::env::var_os(LEDGER_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));

        Self { ledger_file }
    }

    /// Use an exact ledger file (useful for testing)
    pub fn with_ledger_file(ledger_file: impl Into<PathBuf>) -> Self {
        Self {
            ledger_file: ledger_file.into(),
        }
    }

    /// Get the path to the ledger file
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }

    /// Ensure the directory holding the ledger file exists
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        match self.ledger_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    WalletError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })
            }
            _ => Ok(()),
        }
    }
}
