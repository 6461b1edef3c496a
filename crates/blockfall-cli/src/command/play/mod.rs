use anyhow::Context as _;
use blockfall_engine::{Game, PieceSeed};

use crate::command::{config::ConfigArg, play::app::PlayApp};

mod app;
mod keymap;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    config: ConfigArg,
    /// Piece sequence seed (32 hex digits) for a reproducible game
    #[clap(long, value_name = "HEX")]
    seed: Option<PieceSeed>,
    /// Hide the next-piece preview
    #[clap(long)]
    no_preview: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        config,
        seed,
        no_preview,
    } = arg;

    let config = config.resolve()?;
    let game = match seed {
        Some(seed) => Game::with_seed(config, *seed)?,
        None => Game::new(config)?,
    };

    let mut app = PlayApp::new(game, !*no_preview);
    ratatui_runtime::Runtime::new()
        .run(&mut app)
        .context("Terminal UI failed")?;

    let game = app.into_game();
    let stats = game.stats();
    println!(
        "Score: {}  Lines: {}  Pieces: {}",
        stats.score(),
        stats.total_cleared_lines(),
        stats.completed_pieces()
    );
    Ok(())
}
