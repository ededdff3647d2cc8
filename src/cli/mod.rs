//! Interactive command-line interface
//!
//! A numbered menu driven by line-based prompts.

pub mod menu;
pub mod prompt;

pub use menu::{Menu, MenuChoice};
pub use prompt::Prompter;
