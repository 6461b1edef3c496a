pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Why a player action or gravity step was refused.
///
/// A refused action never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionError {
    #[display("piece blocked by a wall, the floor or a locked block")]
    Blocked,
    #[display("game is over")]
    GameOver,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board width must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {width}")]
    BoardWidth { width: usize },
    #[display("board height must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {height}")]
    BoardHeight { height: usize },
    #[display("gravity base interval must be positive")]
    ZeroGravityInterval,
    #[display("gravity minimum interval ({min_ms}ms) exceeds base interval ({base_ms}ms)")]
    GravityRange { min_ms: u64, base_ms: u64 },
    #[display("score_per_ms must be positive when speed scaling is on")]
    ZeroScoreStep,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("seed must be 32 hex characters, got {_0}")]
    Length(#[error(not(source))] usize),
    #[display("invalid hex seed")]
    Hex(std::num::ParseIntError),
}
