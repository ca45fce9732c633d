//! Noughts - terminal front end.

use anyhow::Result;
use clap::Parser;
use noughts::{AdapterConfig, Cli, Presenter, Session};
use std::io::IsTerminal;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr at warn unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    play(cli).await
}

#[instrument]
async fn play(cli: Cli) -> Result<()> {
    let mut config = AdapterConfig::load_or_default(&cli.config)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_delay {
        config = config.without_delay();
    }

    let colored = !cli.no_color && std::io::stdout().is_terminal();
    let mut session = Session::new(config);

    info!(colored, "Starting game");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    noughts::run(&mut session, Presenter::new(colored), stdin, tokio::io::stdout()).await
}
