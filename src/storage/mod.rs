//! Storage layer for the wallet
//!
//! Provides JSON file storage with full-file rewrites. The ledger's parent
//! directory is created on the first save, so opening a ledger never touches
//! the filesystem.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json};
pub use transactions::TransactionStore;

use crate::config::paths::WalletPaths;
use crate::error::WalletError;
use crate::models::Transaction;

/// Main storage coordinator
pub struct Storage {
    paths: WalletPaths,
    pub transactions: TransactionStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: WalletPaths) -> Self {
        Self {
            transactions: TransactionStore::new(paths.ledger_file()),
            paths,
        }
    }

    /// Load every stored transaction
    pub fn load_transactions(&self) -> Result<Vec<Transaction>, WalletError> {
        self.transactions.load()
    }

    /// Save `transactions`, creating the ledger directory if needed
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), WalletError> {
        self.paths.ensure_directories()?;
        self.transactions.save(transactions)
    }
}
