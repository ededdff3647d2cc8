//! Interactive numbered menu
//!
//! Every action runs to completion or fails with a `WalletError`. Failures
//! are reported and the menu is shown again; only the exit entry or the end
//! of input leaves the loop.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::display::{
    format_balance, format_transaction_list, format_transaction_row, format_transaction_table,
};
use crate::error::{WalletError, WalletResult};
use crate::models::{Category, Transaction, TransactionUpdate, DATE_FORMAT};
use crate::services::Wallet;

use super::prompt::Prompter;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    AddIncome,
    AddExpense,
    Edit,
    Search,
    Balance,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::List,
        MenuChoice::AddIncome,
        MenuChoice::AddExpense,
        MenuChoice::Edit,
        MenuChoice::Search,
        MenuChoice::Balance,
        MenuChoice::Exit,
    ];

    /// Menu number shown to the user
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "List transactions",
            Self::AddIncome => "Add income",
            Self::AddExpense => "Add expense",
            Self::Edit => "Edit transaction",
            Self::Search => "Search transactions",
            Self::Balance => "Show balance",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu number
    pub fn parse(s: &str) -> Option<Self> {
        let n: usize = s.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// The interactive session over a wallet
pub struct Menu<'a, R, W> {
    wallet: &'a mut Wallet,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(wallet: &'a mut Wallet, input: R, output: W) -> Self {
        Self {
            wallet,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Only failures to write to the output escape this loop.
    pub fn run(&mut self) -> WalletResult<()> {
        loop {
            self.print_menu()?;

            let answer = match self.prompter.prompt("Choose an action: ") {
                Ok(answer) => answer,
                Err(WalletError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };

            let choice = match MenuChoice::parse(&answer) {
                Some(choice) => choice,
                None => {
                    self.prompter.say("Invalid choice, please try again.")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(WalletError::InputClosed) => return Ok(()),
                Err(e) if e.is_validation() => self.prompter.say(e.to_string())?,
                Err(e) if e.is_not_found() => self
                    .prompter
                    .say("Transaction with this index was not found.")?,
                Err(e) => {
                    warn!(error = %e, ?choice, "menu action failed");
                    self.prompter
                        .say(format!("An unexpected error occurred: {}", e))?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> WalletResult<()> {
        self.prompter.say("")?;
        for choice in MenuChoice::ALL {
            self.prompter
                .say(format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> WalletResult<()> {
        match choice {
            MenuChoice::List => {
                let listing = format_transaction_list(self.wallet.transactions());
                self.prompter.say(listing)
            }
            MenuChoice::AddIncome => self.add_transaction(Category::Income),
            MenuChoice::AddExpense => self.add_transaction(Category::Expense),
            MenuChoice::Edit => self.edit_transaction(),
            MenuChoice::Search => self.search_transactions(),
            MenuChoice::Balance => {
                let balance = format_balance(&self.wallet.balance());
                self.prompter.say(balance)
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_transaction(&mut self, category: Category) -> WalletResult<()> {
        let date = self.prompter.prompt_date("Enter date (YYYY-MM-DD): ")?;
        let amount = self.prompter.prompt_amount("Enter amount: ")?;
        let description = self.prompter.prompt("Enter description: ")?;

        let txn = Transaction::new(category, date, amount, description);
        let index = self.wallet.add(txn)?;

        let row = format_transaction_row(index, self.wallet.get(index)?);
        self.prompter.say(format!("Added. {}", row))
    }

    fn edit_transaction(&mut self) -> WalletResult<()> {
        let answer = self
            .prompter
            .prompt("Enter the index of the transaction to edit: ")?;
        let index = parse_index(&answer)?;
        let current = self.wallet.get(index)?.clone();

        let date = self.prompter.prompt(&format!(
            "Enter a new value for `date` or leave empty to keep it ({}): ",
            current.date.format(DATE_FORMAT)
        ))?;
        let amount = self.prompter.prompt(&format!(
            "Enter a new value for `amount` or leave empty to keep it ({}): ",
            current.amount
        ))?;
        let description = self.prompter.prompt(&format!(
            "Enter a new value for `description` or leave empty to keep it ({}): ",
            current.description
        ))?;

        let update = TransactionUpdate::from_input(date.trim(), amount.trim(), &description)?;
        if update.is_empty() {
            return self.prompter.say("Nothing to change.");
        }

        let row = format_transaction_row(index, self.wallet.edit(index, &update)?);
        self.prompter.say(format!("Updated. {}", row))
    }

    fn search_transactions(&mut self) -> WalletResult<()> {
        let query = self.prompter.prompt("Enter search query: ")?;
        let results = format_transaction_table(self.wallet.search(&query));
        self.prompter.say(results)
    }
}

/// Parse a ledger index typed by the user
///
/// Non-numbers are validation errors; negative numbers can never name a
/// transaction and are reported as not found.
fn parse_index(s: &str) -> WalletResult<usize> {
    let s = s.trim();
    let n: i64 = s.parse().map_err(|_| {
        WalletError::Validation(format!("Invalid index '{}'. Enter a whole number.", s))
    })?;

    usize::try_from(n).map_err(|_| WalletError::NotFound {
        entity_type: "Transaction",
        identifier: format!("index {}", n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalletPaths;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Session {
        _dir: TempDir,
        path: PathBuf,
    }

    impl Session {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("transactions.json");
            Self { _dir: dir, path }
        }

        fn wallet(&self) -> Wallet {
            Wallet::open(WalletPaths::with_ledger_file(&self.path)).unwrap()
        }

        /// Run a scripted session and return everything printed
        fn run(&self, input: &str) -> String {
            let mut wallet = self.wallet();
            let mut out = Vec::new();
            Menu::new(&mut wallet, Cursor::new(input), &mut out)
                .run()
                .unwrap();
            String::from_utf8(out).unwrap()
        }
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("list"), None);
        assert_eq!(MenuChoice::Search.number(), 5);
    }

    #[test]
    fn test_add_income_and_show_balance() {
        let session = Session::new();
        let output = session.run("2\n2022-01-01\n1000\nSalary\n3\n2022-01-02\n500\nRent\n6\n7\n");

        assert!(output.contains("Balance: 500"));
        assert!(output.contains("Income: 1000"));
        assert!(output.contains("Expenses: 500"));

        let wallet = session.wallet();
        assert_eq!(wallet.len(), 2);
        assert!(wallet.transactions()[0].is_income());
        assert!(wallet.transactions()[1].is_expense());
    }

    #[test]
    fn test_add_reprompts_on_bad_input() {
        let session = Session::new();
        let output = session.run("2\n01.01.2022\n2022-01-01\nlots\n100\nGift\n7\n");

        assert!(output.contains("Invalid date format. Use YYYY-MM-DD."));
        assert!(output.contains("Invalid amount 'lots'"));
        assert_eq!(session.wallet().transactions()[0].amount, 100);
    }

    #[test]
    fn test_balance_of_huge_amounts_is_exact() {
        let session = Session::new();
        let output = session.run(
            "2\n2022-01-01\n9223372036854775807\nA\n2\n2022-01-01\n1\nB\n6\n7\n",
        );

        assert!(output.contains("Balance: 9223372036854775808"));
        assert!(output.contains("Income: 9223372036854775808"));
        assert!(output.contains("Expenses: 0"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let session = Session::new();
        let output = session.run("9\n7\n");

        assert!(output.contains("Invalid choice, please try again."));
        assert_eq!(output.matches("1. List transactions").count(), 2);
    }

    #[test]
    fn test_edit_changes_only_given_field() {
        let session = Session::new();
        session.run("2\n2022-01-01\n1000\nSalary\n7\n");

        let output = session.run("4\n0\n\n2000\n\n7\n");
        assert!(output.contains("Updated."));

        let wallet = session.wallet();
        let txn = &wallet.transactions()[0];
        assert_eq!(txn.amount, 2000);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(txn.category, Category::Income);
        assert_eq!(txn.description, "Salary");
    }

    #[test]
    fn test_edit_missing_index_reports_not_found() {
        let session = Session::new();
        let output = session.run("4\n3\n4\n-1\n6\n7\n");

        assert_eq!(
            output
                .matches("Transaction with this index was not found.")
                .count(),
            2
        );
        assert!(output.contains("Balance: 0"));
    }

    #[test]
    fn test_edit_with_bad_values_leaves_record() {
        let session = Session::new();
        session.run("3\n2022-01-02\n500\nRent\n7\n");

        let output = session.run("4\nfirst\n4\n0\n2022-13-01\n\n\n7\n");
        assert!(output.contains("Invalid index 'first'"));
        assert!(output.contains("Invalid date format"));

        let wallet = session.wallet();
        let txn = &wallet.transactions()[0];
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
    }

    #[test]
    fn test_search_lists_matches() {
        let session = Session::new();
        let output = session.run(
            "2\n2022-01-01\n1000\nTest income\n3\n2022-01-02\n500\nCoffee\n5\nCoffee\n7\n",
        );

        let results = output.rsplit("Enter search query: ").next().unwrap();
        assert!(results.contains("Coffee"));
        assert!(!results.contains("Test income"));
    }

    #[test]
    fn test_list_empty_wallet() {
        let session = Session::new();
        let output = session.run("1\n7\n");
        assert!(output.contains("No transactions found."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let session = Session::new();
        session.run("");
        session.run("2\n2022-01-01\n");
        assert!(session.wallet().is_empty());
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 3 ").unwrap(), 3);
        assert!(parse_index("x").unwrap_err().is_validation());
        assert!(parse_index("-2").unwrap_err().is_not_found());
    }
}
