//! Transaction store for JSON storage
//!
//! The ledger file is a JSON array of flat transaction objects. Every record
//! is validated on the way in.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WalletError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json};

/// Loads and saves the full list of transactions
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every transaction, or none if the file does not exist yet
    pub fn load(&self) -> Result<Vec<Transaction>, WalletError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    /// Overwrite the file with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), WalletError> {
        write_json(&self.path, transactions)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}
