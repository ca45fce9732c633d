//! Noughts - terminal noughts and crosses.
//!
//! A thin presentation adapter over [`noughts_engine`]: it renders the
//! board, forwards typed moves, and plays the computer after a short
//! "thinking" delay.
//!
//! # Architecture
//!
//! - **Session**: owns the game state and the opponent's random source
//! - **Presenter**: board and status text, with colored marks
//! - **Input**: line commands
//! - **App**: the read-render loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod presenter;
mod session;

pub use app::run;
pub use cli::Cli;
pub use config::{AdapterConfig, ConfigError};
pub use input::{parse_command, Command};
pub use presenter::{color_of, result_line, turn_line, Presenter, OPPONENT_COLOR, PLAYER_COLOR};
pub use session::Session;
