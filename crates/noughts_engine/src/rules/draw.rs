//! Draw detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
