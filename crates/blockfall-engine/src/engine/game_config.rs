use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Smallest accepted board edge; the I-piece needs four columns to spawn.
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest accepted board edge.
pub const MAX_BOARD_SIZE: usize = 64;

/// Rules of a game session.
///
/// Deserialises from JSON with every field optional; missing fields take the
/// classic 10×20 defaults.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "board_width": 12 }"#).unwrap();
/// assert_eq!(config.board_width, 12);
/// assert_eq!(config.board_height, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub color_mode: ColorMode,
    pub soft_drop_on_blocked: BlockedSoftDrop,
    pub scoring: ScoringRules,
    pub gravity: GravityCurve,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 10,
            board_height: 20,
            color_mode: ColorMode::default(),
            soft_drop_on_blocked: BlockedSoftDrop::default(),
            scoring: ScoringRules::default(),
            gravity: GravityCurve::default(),
        }
    }
}

impl GameConfig {
    /// Checks the board dimensions and gravity curve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if !range.contains(&self.board_width) {
            return Err(ConfigError::BoardWidth {
                width: self.board_width,
            });
        }
        if !range.contains(&self.board_height) {
            return Err(ConfigError::BoardHeight {
                height: self.board_height,
            });
        }
        self.gravity.validate()
    }
}

/// How piece colours are chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Every kind always has its own colour.
    #[default]
    ByKind,
    /// Colour is drawn uniformly and independently of the kind.
    Random,
}

/// What a soft drop does when the piece cannot move down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockedSoftDrop {
    /// Reject the input and leave the piece for gravity to lock.
    #[default]
    Ignore,
    /// Lock the piece immediately, as a gravity tick would.
    Lock,
}

/// Points awarded for clears and drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringRules {
    /// Points per cleared line; `n` lines in one lock score `n * points_per_line`.
    pub points_per_line: usize,
    /// Points per successful soft-drop step.
    pub soft_drop_points: usize,
    /// Points per row travelled by a hard drop.
    pub hard_drop_points: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_line: 100,
            soft_drop_points: 1,
            hard_drop_points: 2,
        }
    }
}

/// Gravity tick interval as a function of score.
///
/// With speed scaling on, the interval is
/// `max(min_interval_ms, base_interval_ms - score / score_per_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GravityCurve {
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    /// Score needed to shave one millisecond off the interval.
    pub score_per_ms: u64,
    pub speed_scaling: bool,
}

impl Default for GravityCurve {
    fn default() -> Self {
        Self {
            base_interval_ms: 500,
            min_interval_ms: 100,
            score_per_ms: 5,
            speed_scaling: true,
        }
    }
}

impl GravityCurve {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_interval_ms == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        if self.min_interval_ms > self.base_interval_ms {
            return Err(ConfigError::GravityRange {
                min_ms: self.min_interval_ms,
                base_ms: self.base_interval_ms,
            });
        }
        if self.speed_scaling && self.score_per_ms == 0 {
            return Err(ConfigError::ZeroScoreStep);
        }
        Ok(())
    }

    /// Tick interval for the given score.
    #[must_use]
    pub fn interval(&self, score: usize) -> Duration {
        let millis = if self.speed_scaling && self.score_per_ms > 0 {
            let score = u64::try_from(score).unwrap_or(u64::MAX);
            self.base_interval_ms
                .saturating_sub(score / self.score_per_ms)
                .max(self.min_interval_ms)
        } else {
            self.base_interval_ms
        };
        Duration::from_millis(millis)
    }
}
