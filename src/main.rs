use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wallet_cli::cli::Menu;
use wallet_cli::config::paths::{WalletPaths, LEDGER_FILE_ENV};
use wallet_cli::logging::init_tracing;
use wallet_cli::services::Wallet;

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal personal finance ledger",
    long_about = "Records income and expenses in a JSON file. Start it and pick \
                  actions from the numbered menu to list, add, edit and search \
                  transactions or show the balance."
)]
struct Cli {
    /// Ledger file (defaults to ./transactions.json)
    #[arg(short, long, env = LEDGER_FILE_ENV)]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr (applied on top of RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = WalletPaths::new(cli.file);
    let ledger = paths.ledger_file().display().to_string();
    let mut wallet =
        Wallet::open(paths).with_context(|| format!("Failed to open ledger {}", ledger))?;

    let stdin = io::stdin();
    Menu::new(&mut wallet, stdin.lock(), io::stdout()).run()?;

    Ok(())
}
