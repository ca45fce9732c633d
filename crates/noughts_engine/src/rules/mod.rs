//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`]. They know nothing about turns or
//! history, so the engine and the invariants can both build on them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, GameResult};
use tracing::instrument;

/// Evaluates a board.
///
/// The first completed line, scanned rows then columns then diagonals,
/// decides the winner. A full board without a line is a draw.
#[instrument]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::win_for(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Actor, Cell, Position};

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), GameResult::Ongoing);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        use Actor::{Opponent as O, Player as P};
        // P P P / O O P / P O O
        let board = Board::from_cells([P, P, P, O, O, P, P, O, O].map(Cell::Occupied));
        assert_eq!(evaluate(&board), GameResult::PlayerWin);
    }

    #[test]
    fn test_upper_row_decides_between_two_rows() {
        // Unreachable in play, but the scan order must still decide it.
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Cell::Occupied(Actor::Opponent));
        }
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.set(pos, Cell::Occupied(Actor::Player));
        }
        assert_eq!(evaluate(&board), GameResult::OpponentWin);
    }

    #[test]
    fn test_left_column_decides_between_two_columns() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
            board.set(pos, Cell::Occupied(Actor::Player));
        }
        for pos in [Position::TopRight, Position::MiddleRight, Position::BottomRight] {
            board.set(pos, Cell::Occupied(Actor::Opponent));
        }
        assert_eq!(evaluate(&board), GameResult::PlayerWin);
    }
}
