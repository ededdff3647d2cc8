//! Transaction model
//!
//! A transaction is either income or expense. Every transaction is built
//! through validation, whether it comes from user input or from the ledger
//! file, so an existing `Transaction` always holds a real calendar date and
//! an integer amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::category::Category;
use crate::error::{WalletError, WalletResult};

/// Date format used for display, storage and input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Flat, unvalidated field mapping for a transaction
///
/// This is the shape stored in the ledger file. `amount` is kept as a raw
/// JSON value so integer-like strings and whole floats can be coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub category: String,
    pub amount: Value,
    #[serde(default)]
    pub description: String,
}

impl TransactionRecord {
    /// Build a record from string fields, as typed by a user
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

/// A validated ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    pub category: Category,

    /// Amount in whole currency units
    pub amount: i64,

    /// Free-form description
    pub description: String,
}

impl Transaction {
    /// Create a transaction of the given category
    pub fn new(
        category: Category,
        date: NaiveDate,
        amount: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            description: description.into(),
        }
    }

    /// Create an income transaction
    pub fn income(date: NaiveDate, amount: i64, description: impl Into<String>) -> Self {
        Self::new(Category::Income, date, amount, description)
    }

    /// Create an expense transaction
    pub fn expense(date: NaiveDate, amount: i64, description: impl Into<String>) -> Self {
        Self::new(Category::Expense, date, amount, description)
    }

    /// Validate a raw field mapping and build a transaction from it
    pub fn from_record(record: TransactionRecord) -> WalletResult<Self> {
        let date = parse_date(&record.date)?;
        let category = Category::parse(&record.category).ok_or_else(|| {
            WalletError::Validation(format!(
                "Invalid category '{}'. Use 'Income' or 'Expense'.",
                record.category
            ))
        })?;
        let amount = coerce_amount(&record.amount)?;

        Ok(Self {
            date,
            category,
            amount,
            description: record.description,
        })
    }

    /// Flatten into the stored field mapping
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            date: self.date.format(DATE_FORMAT).to_string(),
            category: self.category.as_str().to_string(),
            amount: Value::from(self.amount),
            description: self.description.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.category.is_expense()
    }

    /// The field values rendered and joined, as matched by search
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount,
            self.description
        )
    }

    /// Apply the supplied fields of an update, leaving the rest untouched
    pub fn apply(&mut self, update: &TransactionUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(description) = update.description.as_deref() {
            if !description.is_empty() {
                self.description = description.to_string();
            }
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = WalletError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(txn: Transaction) -> Self {
        txn.to_record()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Partial update for an existing transaction
///
/// Only the fields set to `Some` are written. The category has no field here:
/// a record never changes kind after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<i64>,
    pub description: Option<String>,
}

impl TransactionUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the amount
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build an update from raw text input, treating empty strings as "keep"
    pub fn from_input(date: &str, amount: &str, description: &str) -> WalletResult<Self> {
        let mut update = Self::new();
        if !date.is_empty() {
            update.date = Some(parse_date(date)?);
        }
        if !amount.is_empty() {
            update.amount = Some(parse_amount(amount)?);
        }
        if !description.is_empty() {
            update.description = Some(description.to_string());
        }
        Ok(update)
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.description.as_deref().map_or(true, str::is_empty)
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> WalletResult<NaiveDate> {
    let invalid =
        || WalletError::Validation("Invalid date format. Use YYYY-MM-DD.".to_string());

    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Parse an integer amount from text
pub fn parse_amount(s: &str) -> WalletResult<i64> {
    s.trim().parse::<i64>().map_err(|_| {
        WalletError::Validation(format!("Invalid amount '{}'. Enter a whole number.", s))
    })
}

/// Coerce a raw JSON value to an integer amount
///
/// Accepts integers, integer strings and floats with no fractional part.
fn coerce_amount(value: &Value) -> WalletResult<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(WalletError::Validation(format!(
                    "Invalid amount '{}'. Enter a whole number.",
                    n
                ))),
            }
        }
        Value::String(s) => parse_amount(s),
        other => Err(WalletError::Validation(format!(
            "Invalid amount '{}'. Enter a whole number.",
            other
        ))),
    }
}
