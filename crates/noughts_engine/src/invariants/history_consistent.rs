//! History consistency invariant: history length matches occupied cells.

use super::super::GameState;
use super::Invariant;

/// Invariant: history length equals the number of occupied cells.
///
/// Every move corresponds to exactly one mark on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().len() == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
