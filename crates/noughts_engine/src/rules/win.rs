//! Win detection.

use super::super::{Actor, Board, Cell, Position};
use tracing::instrument;

/// The eight lines in scan order: rows top to bottom, columns left to
/// right, then the `\` and `/` diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Returns the actor owning the first completed line, if any.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Actor> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(actor) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(actor)
        }
        _ => None,
    })
}
