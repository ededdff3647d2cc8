//! Wallet service
//!
//! The wallet is an ordered list of transactions mirrored to the ledger
//! file. Position in the list is the transaction's identity. Every mutation
//! rewrites the whole file before returning.

use tracing::{info, warn};

use crate::config::paths::WalletPaths;
use crate::error::{WalletError, WalletResult};
use crate::models::{Transaction, TransactionUpdate};
use crate::storage::Storage;

/// Income and expense totals
///
/// Totals are widened to `i128` so summing any number of `i64` amounts
/// cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    pub income: i128,
    pub expenses: i128,
}

impl Balance {
    /// Income minus expenses
    pub fn net(&self) -> i128 {
        self.income - self.expenses
    }
}

/// File-backed ledger of transactions
pub struct Wallet {
    storage: Storage,
    transactions: Vec<Transaction>,
}

impl Wallet {
    /// Open the wallet at the resolved ledger path
    pub fn open(paths: WalletPaths) -> WalletResult<Self> {
        Self::new(Storage::new(paths))
    }

    /// Build a wallet on top of storage, loading existing transactions
    pub fn new(storage: Storage) -> WalletResult<Self> {
        let transactions = storage.load_transactions()?;
        Ok(Self {
            storage,
            transactions,
        })
    }

    /// All transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get the transaction at `index`
    pub fn get(&self, index: usize) -> WalletResult<&Transaction> {
        self.transactions
            .get(index)
            .ok_or_else(|| WalletError::transaction_not_found(index))
    }

    /// Write every transaction to the ledger file
    pub fn save(&self) -> WalletResult<()> {
        self.storage.save_transactions(&self.transactions)
    }

    /// Append a transaction and persist; returns its index
    ///
    /// If the file cannot be written the transaction is dropped again, so
    /// memory never runs ahead of disk.
    pub fn add(&mut self, txn: Transaction) -> WalletResult<usize> {
        self.transactions.push(txn);
        let index = self.transactions.len() - 1;

        if let Err(e) = self.save() {
            warn!(error = %e, "failed to persist new transaction");
            self.transactions.pop();
            return Err(e);
        }

        info!(index, category = %self.transactions[index].category, "transaction added");
        Ok(index)
    }

    /// Overwrite the supplied fields of the transaction at `index` and persist
    pub fn edit(&mut self, index: usize, update: &TransactionUpdate) -> WalletResult<&Transaction> {
        let txn = self
            .transactions
            .get_mut(index)
            .ok_or_else(|| WalletError::transaction_not_found(index))?;

        let before = txn.clone();
        txn.apply(update);

        if let Err(e) = self.save() {
            warn!(index, error = %e, "failed to persist edited transaction");
            self.transactions[index] = before;
            return Err(e);
        }

        info!(index, "transaction edited");
        Ok(&self.transactions[index])
    }

    /// Every transaction whose rendered fields contain `query`
    ///
    /// Plain case-sensitive substring match.
    pub fn search(&self, query: &str) -> Vec<(usize, &Transaction)> {
        self.transactions
            .iter()
            .enumerate()
            .filter(|(_, txn)| txn.search_text().contains(query))
            .collect()
    }

    /// Sum income and expenses separately
    pub fn balance(&self) -> Balance {
        self.transactions
            .iter()
            .fold(Balance::default(), |mut balance, txn| {
                if txn.is_income() {
                    balance.income += i128::from(txn.amount);
                } else {
                    balance.expenses += i128::from(txn.amount);
                }
                balance
            })
    }
}
