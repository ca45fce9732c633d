//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameState};
use super::Invariant;

/// Invariant: every mark was placed on an empty cell and never replaced.
///
/// Checked by replaying the history onto an empty board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.actor));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
