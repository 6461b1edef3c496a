use std::path::PathBuf;

use anyhow::Context as _;
use blockfall_engine::{BlockedSoftDrop, ColorMode, GameConfig};

use crate::util;

/// Game rule options shared by every subcommand that needs a [`GameConfig`].
///
/// Flags override the config file, which overrides the built-in defaults.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Game configuration file (JSON)
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Board width in columns
    #[clap(long)]
    width: Option<usize>,
    /// Board height in rows
    #[clap(long)]
    height: Option<usize>,
    /// Give every piece a random colour instead of its kind's colour
    #[clap(long)]
    random_colors: bool,
    /// Keep the gravity interval constant regardless of score
    #[clap(long)]
    fixed_speed: bool,
    /// Lock the piece when a soft drop is blocked
    #[clap(long)]
    soft_drop_locks: bool,
}

impl ConfigArg {
    /// Builds and validates the effective configuration.
    pub(crate) fn resolve(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_json_file("config", path)?,
            None => GameConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if self.random_colors {
            config.color_mode = ColorMode::Random;
        }
        if self.fixed_speed {
            config.gravity.speed_scaling = false;
        }
        if self.soft_drop_locks {
            config.soft_drop_on_blocked = BlockedSoftDrop::Lock;
        }
    }
}
