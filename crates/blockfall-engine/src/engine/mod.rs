//! Game rules and state management.
//!
//! This module builds the playable game on top of the core board and piece
//! types:
//!
//! - [`Game`] - The state machine: active and next piece, gravity, locking,
//!   line clears and game over
//! - [`GameConfig`] - Board size, colour mode, scoring and gravity curve
//! - [`GameStats`] - Score and line-clear statistics
//! - [`PieceGenerator`] - Uniform random piece supply
//! - [`PieceSeed`] - Seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. Create a [`Game`] from a validated [`GameConfig`]
//! 2. Feed it [`GameEvent`]s: gravity ticks on a timer, commands from input
//! 3. When the active piece can no longer fall it locks, full rows are
//!    cleared and the next piece spawns
//! 4. A blocked spawn ends the game; [`Game::reset`] starts a new one
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Command, Game, GameConfig, GameEvent};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//!
//! game.handle_event(GameEvent::Input(Command::MoveRight)).ok();
//! let outcome = game
//!     .handle_event(GameEvent::Input(Command::HardDrop))
//!     .unwrap()
//!     .unwrap();
//!
//! if outcome.game_over {
//!     println!("Game over!");
//! }
//! ```

pub use self::{game::*, game_config::*, game_stats::*, piece_generator::*};

mod game;
mod game_config;
mod game_stats;
mod piece_generator;
