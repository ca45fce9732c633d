//! One player's session against the computer.
//!
//! The session owns the only live [`GameState`] and swaps it for the
//! engine's successor after every accepted move. The opponent's thinking
//! delay lives here, wrapped around the engine's synchronous move choice.

use crate::config::AdapterConfig;
use noughts_engine::{Actor, GameEngine, GameResult, GameState, MoveError, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// A running game plus its random source.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    rng: ChaCha8Rng,
    config: AdapterConfig,
}

impl Session {
    /// Creates a session, seeding the random source from config when set.
    #[instrument(skip(config))]
    pub fn new(config: AdapterConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        info!(seeded = config.seed().is_some(), "Session created");
        Self {
            state: GameEngine::new_game(),
            rng,
            config,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true when the opponent should move next.
    pub fn opponent_to_move(&self) -> bool {
        !self.state.is_over() && self.state.turn() == Actor::Opponent
    }

    /// Places the player's mark.
    ///
    /// A rejected move leaves the state untouched; the caller may ignore
    /// the error.
    #[instrument(skip(self))]
    pub fn player_move(&mut self, position: Position) -> Result<(), MoveError> {
        match GameEngine::apply_move(&self.state, position, Actor::Player) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "Ignoring player move");
                Err(e)
            }
        }
    }

    /// Lets the opponent move immediately.
    ///
    /// Returns the chosen cell, or `None` if the opponent is not to move or
    /// no empty cell remains. A full board is reported as a stalemate by
    /// the engine's result, so `None` never needs special handling.
    #[instrument(skip(self))]
    pub fn opponent_move(&mut self) -> Option<Position> {
        if !self.opponent_to_move() {
            return None;
        }
        let Some(position) = GameEngine::choose_opponent_move(&self.state, &mut self.rng) else {
            debug!("Board exhausted, treating as stalemate");
            return None;
        };
        match GameEngine::apply_move(&self.state, position, Actor::Opponent) {
            Ok(next) => {
                self.state = next;
                Some(position)
            }
            Err(e) => {
                debug!(error = %e, "Opponent move rejected");
                None
            }
        }
    }

    /// Waits a random thinking delay, then lets the opponent move.
    #[instrument(skip(self))]
    pub async fn opponent_turn(&mut self) -> Option<Position> {
        if !self.opponent_to_move() {
            return None;
        }
        let delay = self.thinking_delay();
        debug!(delay_ms = delay.as_millis() as u64, "Opponent thinking");
        tokio::time::sleep(delay).await;
        self.opponent_move()
    }

    /// Draws the next thinking delay from the configured range.
    pub fn thinking_delay(&mut self) -> Duration {
        let (min, max) = (*self.config.min_delay_ms(), *self.config.max_delay_ms());
        Duration::from_millis(self.rng.gen_range(min..=max))
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous = ?self.state.result(), "Restarting game");
        self.state = GameEngine::new_game();
    }

    /// Result of the current game.
    pub fn result(&self) -> GameResult {
        self.state.result()
    }
}
