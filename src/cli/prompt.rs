//! Line-based prompting
//!
//! Reads answers one line at a time from any `BufRead` and writes prompts to
//! any `Write`, so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{WalletError, WalletResult};
use crate::models::{parse_amount, parse_date};

/// Prompt reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, message: impl AsRef<str>) -> WalletResult<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Prompt for a string input
    ///
    /// The line ending is stripped; other whitespace is kept. Returns
    /// `WalletError::InputClosed` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> WalletResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WalletError::InputClosed);
        }

        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// Prompt until a valid `YYYY-MM-DD` date is entered
    pub fn prompt_date(&mut self, prompt: &str) -> WalletResult<NaiveDate> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse_date(answer.trim()) {
                Ok(date) => return Ok(date),
                Err(WalletError::Validation(msg)) => self.say(msg)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt until a whole-number amount is entered
    pub fn prompt_amount(&mut self, prompt: &str) -> WalletResult<i64> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(WalletError::Validation(msg)) => self.say(msg)?,
                Err(e) => return Err(e),
            }
        }
    }
}
