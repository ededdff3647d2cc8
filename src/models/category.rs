//! Category model
//!
//! The category is the fixed discriminator that separates income from
//! expense records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl Category {
    /// All allowed categories, in menu order
    pub const ALL: [Category; 2] = [Category::Income, Category::Expense];

    /// The tag stored in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Parse a category from its stored tag
    ///
    /// Matching is exact: the ledger file only ever contains the canonical
    /// tags.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Category::parse("Income"), Some(Category::Income));
        assert_eq!(Category::parse("Expense"), Some(Category::Expense));
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        assert_eq!(Category::parse("Invalid"), None);
        assert_eq!(Category::parse("income"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_display_matches_stored_tag() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Category::Expense).unwrap();
        assert_eq!(json, "\"Expense\"");
    }
}
