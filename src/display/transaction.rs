//! Transaction display formatting
//!
//! Lists are rendered as tables; the index column is the position used by
//! the edit command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, DATE_FORMAT};
use crate::services::Balance;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: i64,
    #[tabled(rename = "Description")]
    description: String,
}

impl TransactionRow {
    fn new(index: usize, txn: &Transaction) -> Self {
        Self {
            index,
            date: txn.date.format(DATE_FORMAT).to_string(),
            category: txn.category.to_string(),
            amount: txn.amount,
            description: txn.description.clone(),
        }
    }
}

/// Format a single transaction with its index
pub fn format_transaction_row(index: usize, txn: &Transaction) -> String {
    format!("Index: {}, Transaction: {}", index, txn)
}

/// Format indexed transactions as a table
pub fn format_transaction_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Transaction)>,
{
    let rows: Vec<TransactionRow> = entries
        .into_iter()
        .map(|(index, txn)| TransactionRow::new(index, txn))
        .collect();

    if rows.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format the whole ledger, in order
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    format_transaction_table(transactions.iter().enumerate())
}

/// Format income/expense totals
pub fn format_balance(balance: &Balance) -> String {
    format!(
        "Balance: {}\nIncome: {}\nExpenses: {}",
        balance.net(),
        balance.income,
        balance.expenses
    )
}
