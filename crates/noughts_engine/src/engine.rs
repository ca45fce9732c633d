//! The game engine: rule logic and turn sequencing.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::random::RandomSource;
use super::{rules, Actor, Board, Cell, GameResult, GameState, Position};
use tracing::{debug, instrument};

/// Noughts-and-crosses rules.
///
/// Stateless: every operation borrows a [`GameState`] and returns a new
/// value. The caller owns the single live state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine;

impl GameEngine {
    /// Starts a game: empty board, player to move, result ongoing.
    #[instrument]
    pub fn new_game() -> GameState {
        GameState::new()
    }

    /// Places `actor`'s mark at `position`, returning the successor state.
    ///
    /// The result is recomputed from the new board and the turn passes to
    /// the other actor only while the game is still ongoing.
    ///
    /// # Errors
    ///
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    /// - [`MoveError::GameAlreadyOver`] if the state has a result
    /// - [`MoveError::WrongTurn`] if `actor` is not to move
    ///
    /// These are checked in that order.
    #[instrument(skip(state), fields(turn = ?state.turn(), result = ?state.result()))]
    pub fn apply_move(
        state: &GameState,
        position: Position,
        actor: Actor,
    ) -> Result<GameState, MoveError> {
        let action = Move::new(actor, position);
        MoveContract::pre(state, &action)?;

        let mut next = state.clone();
        next.board.set(position, Cell::Occupied(actor));
        next.history.push(action);
        next.result = rules::evaluate(&next.board);
        if next.result == GameResult::Ongoing {
            next.turn = actor.other();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(state, &next)?;

        debug!(%action, result = ?next.result, "Move applied");
        Ok(next)
    }

    /// Picks a cell for the opponent uniformly among the empty ones.
    ///
    /// Returns `None` when the board is full. The draw from `rng` is reduced
    /// modulo the number of empty cells, which are taken in row-major order.
    #[instrument(skip(state, rng))]
    pub fn choose_opponent_move<R>(state: &GameState, rng: &mut R) -> Option<Position>
    where
        R: RandomSource + ?Sized,
    {
        let empty = Position::valid_moves(state.board());
        if empty.is_empty() {
            debug!("No empty cells left");
            return None;
        }
        let choice = empty[rng.draw(empty.len()) % empty.len()];
        debug!(position = %choice, candidates = empty.len(), "Opponent chose cell");
        Some(choice)
    }

    /// Evaluates a board: first completed line wins, else draw if full.
    pub fn evaluate(board: &Board) -> GameResult {
        rules::evaluate(board)
    }

    /// Empty cells of the state's board, in row-major order.
    pub fn valid_moves(state: &GameState) -> Vec<Position> {
        Position::valid_moves(state.board())
    }

    /// Applies `moves` in order from a new game.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is rejected.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
        moves.iter().try_fold(Self::new_game(), |state, mov| {
            Self::apply_move(&state, mov.position, mov.actor)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn draw(&mut self, _bound: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_new_game() {
        let state = GameEngine::new_game();
        assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(state.turn(), Actor::Player);
        assert_eq!(state.result(), GameResult::Ongoing);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let state = GameEngine::new_game();
        let next = GameEngine::apply_move(&state, Position::Center, Actor::Player).unwrap();
        assert_eq!(state, GameEngine::new_game());
        assert_eq!(next.board().get(Position::Center), Cell::Occupied(Actor::Player));
        assert_eq!(next.turn(), Actor::Opponent);
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let moves = [
            Move::new(Actor::Player, Position::TopLeft),
            Move::new(Actor::Opponent, Position::Center),
            Move::new(Actor::Player, Position::TopCenter),
            Move::new(Actor::Opponent, Position::BottomLeft),
            Move::new(Actor::Player, Position::TopRight),
        ];
        let state = GameEngine::replay(&moves).unwrap();
        assert_eq!(state.result(), GameResult::PlayerWin);
        assert_eq!(state.turn(), Actor::Player);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let moves = [
            Move::new(Actor::Player, Position::TopLeft),
            Move::new(Actor::Opponent, Position::Center),
            Move::new(Actor::Player, Position::TopCenter),
            Move::new(Actor::Opponent, Position::BottomLeft),
            Move::new(Actor::Player, Position::TopRight),
        ];
        let state = GameEngine::replay(&moves).unwrap();
        for actor in [Actor::Player, Actor::Opponent] {
            assert_eq!(
                GameEngine::apply_move(&state, Position::BottomRight, actor),
                Err(MoveError::GameAlreadyOver)
            );
        }
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let moves = [
            Move::new(Actor::Player, Position::Center),
            Move::new(Actor::Player, Position::TopLeft),
        ];
        assert_eq!(
            GameEngine::replay(&moves),
            Err(MoveError::WrongTurn(Actor::Player))
        );
    }

    #[test]
    fn test_choose_reduces_draw_modulo_candidates() {
        let state = GameEngine::new_game();
        assert_eq!(
            GameEngine::choose_opponent_move(&state, &mut Fixed(4)),
            Some(Position::Center)
        );
        assert_eq!(
            GameEngine::choose_opponent_move(&state, &mut Fixed(13)),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_choose_skips_occupied_cells() {
        let state =
            GameEngine::apply_move(&GameEngine::new_game(), Position::TopLeft, Actor::Player)
                .unwrap();
        // First candidate is now TopCenter.
        assert_eq!(
            GameEngine::choose_opponent_move(&state, &mut Fixed(0)),
            Some(Position::TopCenter)
        );
    }
}
