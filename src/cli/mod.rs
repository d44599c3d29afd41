pub mod commands;

pub use commands::Cli;

use clap::Parser;
use std::io::{self, BufRead, Write};

pub fn parse() -> Cli {
    Cli::parse()
}

/// Prompts the operator and blocks until a line (Enter) is read from stdin.
pub fn wait_for_acknowledgement() -> io::Result<()> {
    print!("\nPress Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
