//! Noughts engine - pure game rules for noughts and crosses.
//!
//! A human [`Actor::Player`] plays a computer [`Actor::Opponent`] that
//! picks uniformly at random among empty cells. Every operation takes the
//! current [`GameState`] by reference and returns a new one, so the caller
//! owns the only copy of the game.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Actor, GameEngine, GameResult, Position};
//!
//! let state = GameEngine::new_game();
//! let state = GameEngine::apply_move(&state, Position::Center, Actor::Player)?;
//! assert_eq!(state.turn(), Actor::Opponent);
//! assert_eq!(state.result(), GameResult::Ongoing);
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod random;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{ActorsTurn, CellIsEmpty, Contract, GameIsOngoing, LegalMove, MoveContract};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use position::Position;
pub use random::RandomSource;
pub use rules::{check_winner, evaluate, is_full};
pub use types::{Actor, Board, Cell, GameResult, GameState};

/// Alias matching the turn indicator: whose move it is.
pub type Turn = Actor;
