//! Command-line interface for noughts.

use clap::Parser;

/// Noughts - play noughts and crosses against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Seed for the computer's moves, overriding the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer answer immediately
    #[arg(long)]
    pub no_delay: bool,

    /// Never color the marks
    #[arg(long)]
    pub no_color: bool,
}
