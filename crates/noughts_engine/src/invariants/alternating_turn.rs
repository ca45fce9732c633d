//! Alternating turn invariant: Player, Opponent, Player, ...

use super::super::{Actor, GameState};
use super::Invariant;

/// Invariant: actors alternate and the player moves first.
///
/// While the game is ongoing, the actor to move is the player exactly when
/// an even number of moves has been made. Once the game is over the turn
/// stays with whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return state.turn() == Actor::Player;
        };
        if first.actor != Actor::Player {
            return false;
        }
        if history.windows(2).any(|w| w[0].actor == w[1].actor) {
            return false;
        }

        // The final move of a finished game does not hand the turn over.
        let handovers = if state.is_over() {
            history.len() - 1
        } else {
            history.len()
        };
        state.turn() == to_move_after(handovers)
    }

    fn description() -> &'static str {
        "Actors alternate turns (Player, Opponent, Player, ...)"
    }
}

fn to_move_after(handovers: usize) -> Actor {
    if handovers % 2 == 0 {
        Actor::Player
    } else {
        Actor::Opponent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves = [
            Move::new(Actor::Player, Position::TopLeft),
            Move::new(Actor::Opponent, Position::Center),
            Move::new(Actor::Player, Position::TopRight),
            Move::new(Actor::Opponent, Position::BottomLeft),
            Move::new(Actor::Player, Position::BottomRight),
        ];
        let state = GameEngine::replay(&moves).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.turn(), Actor::Opponent);
    }

    #[test]
    fn test_finished_game_holds() {
        let moves = [
            Move::new(Actor::Player, Position::TopLeft),
            Move::new(Actor::Opponent, Position::Center),
            Move::new(Actor::Player, Position::TopCenter),
            Move::new(Actor::Opponent, Position::BottomLeft),
            Move::new(Actor::Player, Position::TopRight),
        ];
        let state = GameEngine::replay(&moves).unwrap();
        assert!(state.is_over());
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_same_actor_twice_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Actor::Player, Position::TopLeft));
        state.history.push(Move::new(Actor::Player, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_opponent_first_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Actor::Opponent, Position::TopLeft));
        state.turn = Actor::Player;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
