//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`.

use super::action::{Move, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::GameState;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied cell.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Precondition: the game must not have a result yet.
pub struct GameIsOngoing;

impl GameIsOngoing {
    /// Rejects any move once the game is over.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the actor's turn.
pub struct ActorsTurn;

impl ActorsTurn {
    /// Rejects a move by the actor who is not to move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.actor == state.turn() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn(mov.actor))
        }
    }
}

/// Composite precondition, checked in order: empty cell, ongoing game,
/// actor's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, state)?;
        GameIsOngoing::check(mov, state)?;
        ActorsTurn::check(mov, state)?;
        Ok(())
    }
}

/// Contract for [`Move`] actions.
///
/// Preconditions are [`LegalMove`]. Postconditions are
/// [`EngineInvariants`] on the new state, plus growth by exactly one move.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not add exactly one history entry"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by one move".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
