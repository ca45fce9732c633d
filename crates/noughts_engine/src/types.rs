//! Core domain types for noughts and crosses.

use super::action::Move;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Whoever is making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The human player (moves first, marks `X`).
    Player,
    /// The computer opponent (marks `O`).
    Opponent,
}

impl Actor {
    /// Returns the other actor.
    pub fn other(self) -> Self {
        match self {
            Actor::Player => Actor::Opponent,
            Actor::Opponent => Actor::Player,
        }
    }

    /// The mark this actor places on the board.
    pub fn symbol(self) -> char {
        match self {
            Actor::Player => 'X',
            Actor::Opponent => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding an actor's mark.
    Occupied(Actor),
}

impl Cell {
    /// Returns the actor whose mark is in this cell.
    pub fn actor(self) -> Option<Actor> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(actor) => Some(actor),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line and empty cells remain.
    Ongoing,
    /// The player completed a line.
    PlayerWin,
    /// The opponent completed a line.
    OpponentWin,
    /// Board full without a line.
    Draw,
}

impl GameResult {
    /// The winning result for an actor.
    pub fn win_for(actor: Actor) -> Self {
        match actor {
            Actor::Player => GameResult::PlayerWin,
            Actor::Opponent => GameResult::OpponentWin,
        }
    }

    /// Returns true once the result is terminal.
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Actor> {
        match self {
            GameResult::PlayerWin => Some(Actor::Player),
            GameResult::OpponentWin => Some(Actor::Opponent),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

/// Complete game state.
///
/// Only [`GameEngine::apply_move`](crate::GameEngine::apply_move) produces
/// a successor; a state whose result is not `Ongoing` has no successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Actor,
    pub(crate) result: GameResult,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, player to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Actor::Player,
            result: GameResult::Ongoing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actor to move.
    ///
    /// After the game ends this stays on the actor who made the last move.
    pub fn turn(&self) -> Actor {
        self.turn
    }

    /// Returns the game result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the moves made so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the result is terminal.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
