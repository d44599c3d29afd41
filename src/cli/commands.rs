use clap::Parser; // `Parser` derives argument parsing for the `Cli` struct.

/// Command-line interface for the `sysclean` utility.
///
/// Running without any flags performs the full cleanup and waits for Enter before
/// exiting.
#[derive(Parser, Debug)]
#[command(
    name = "sysclean",
    about = "🧹 Clears temp folders, the boot cache and the recycle bin",
    version
)]
pub struct Cli {
    /// Show debug-level log messages
    #[arg(long)]
    pub debug: bool,

    /// Exit immediately when done instead of waiting for Enter
    #[arg(long = "no-pause")]
    pub no_pause: bool,
}
