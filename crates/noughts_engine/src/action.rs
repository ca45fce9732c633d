//! Moves and move errors.
//!
//! A move is a domain event: an actor placing their mark at a position.
//! It can be validated before it is applied and kept in history for replay.

use super::{Actor, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An actor placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The actor making the move.
    pub actor: Actor,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(actor: Actor, position: Position) -> Self {
        Self { actor, position }
    }

    /// Returns the actor making this move.
    pub fn actor(&self) -> Actor {
        self.actor
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.actor, self.position.label())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The actor is not the one whose turn it is.
    #[display("It's not {:?}'s turn", _0)]
    WrongTurn(Actor),

    /// The game already has a result.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
