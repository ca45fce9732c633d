//! Text rendering of a game state.

use crossterm::style::{Color, Stylize};
use noughts_engine::{Actor, Cell, GameResult, GameState};

/// Player mark color (`#aa0000`).
pub const PLAYER_COLOR: Color = Color::Rgb { r: 0xaa, g: 0x00, b: 0x00 };

/// Opponent mark color (`#0000aa`).
pub const OPPONENT_COLOR: Color = Color::Rgb { r: 0x00, g: 0x00, b: 0xaa };

/// Renders boards and status lines.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    colored: bool,
}

impl Presenter {
    /// Creates a presenter; `colored` adds ANSI colors to the marks.
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Board grid; empty cells show the number that selects them.
    pub fn board(&self, state: &GameState) -> String {
        let cells = state.board().cells();
        let mut out = String::new();
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| self.cell(cells[row * 3 + col], row * 3 + col))
                .collect();
            out.push_str(&format!(" {} \n", line.join(" | ")));
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }
        out
    }

    fn cell(&self, cell: Cell, index: usize) -> String {
        match cell {
            Cell::Empty if self.colored => (index + 1).to_string().dark_grey().to_string(),
            Cell::Empty => (index + 1).to_string(),
            Cell::Occupied(actor) => {
                let mark = actor.symbol().to_string();
                if self.colored {
                    mark.with(color_of(actor)).bold().to_string()
                } else {
                    mark
                }
            }
        }
    }

    /// Full screen: board, turn line and result line.
    pub fn screen(&self, state: &GameState) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.board(state),
            turn_line(state),
            result_line(state.result())
        )
    }
}

/// Display color for an actor's mark.
pub fn color_of(actor: Actor) -> Color {
    match actor {
        Actor::Player => PLAYER_COLOR,
        Actor::Opponent => OPPONENT_COLOR,
    }
}

/// The "current turn" indicator.
pub fn turn_line(state: &GameState) -> &'static str {
    if state.is_over() {
        return "Current turn: Game Over!";
    }
    match state.turn() {
        Actor::Player => "Current turn: Player",
        Actor::Opponent => "Current turn: Computer",
    }
}

/// The outcome indicator.
pub fn result_line(result: GameResult) -> &'static str {
    match result {
        GameResult::Ongoing => "The game is ongoing...",
        GameResult::PlayerWin => "The game is a victory!",
        GameResult::OpponentWin => "The game is a loss :(",
        GameResult::Draw => "The game is a stalemate...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{GameEngine, Position};

    #[test]
    fn test_plain_board() {
        let state = GameEngine::apply_move(&GameEngine::new_game(), Position::Center, Actor::Player)
            .unwrap();
        let board = Presenter::new(false).board(&state);
        assert_eq!(
            board,
            " 1 | 2 | 3 \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_turn_lines() {
        let state = GameEngine::new_game();
        assert_eq!(turn_line(&state), "Current turn: Player");
        let state = GameEngine::apply_move(&state, Position::Center, Actor::Player).unwrap();
        assert_eq!(turn_line(&state), "Current turn: Computer");
    }

    #[test]
    fn test_result_lines() {
        assert_eq!(result_line(GameResult::PlayerWin), "The game is a victory!");
        assert_eq!(result_line(GameResult::OpponentWin), "The game is a loss :(");
        assert_eq!(result_line(GameResult::Draw), "The game is a stalemate...");
        assert_eq!(result_line(GameResult::Ongoing), "The game is ongoing...");
    }

    #[test]
    fn test_colored_marks_carry_escape_codes() {
        let state = GameEngine::apply_move(&GameEngine::new_game(), Position::Center, Actor::Player)
            .unwrap();
        let board = Presenter::new(true).board(&state);
        assert!(board.contains('\u{1b}'));
        assert!(board.contains('X'));
    }
}
