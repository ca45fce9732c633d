//! Line commands typed at the prompt.

use noughts_engine::Position;
use tracing::instrument;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the player's mark.
    Place(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
    /// Anything else; ignored.
    Unknown,
}

/// Parses a line: `1`-`9` or a cell label, `n`/`new`, `q`/`quit`.
#[instrument]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" | "restart" => Command::Restart,
        _ => Position::from_label_or_number(trimmed)
            .map(Command::Place)
            .unwrap_or(Command::Unknown),
    }
}
