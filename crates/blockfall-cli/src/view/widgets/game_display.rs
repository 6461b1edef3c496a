use blockfall_engine::{Game, LockOutcome};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::view::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// Whether the player is in control, has paused, or has lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
    GameOver,
}

/// Full game screen: stats, board, next-piece preview and status line.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a Game,
    state: PlayState,
    show_preview: bool,
    last_lock: Option<LockOutcome>,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a Game, state: PlayState) -> Self {
        Self {
            game,
            state,
            show_preview: true,
            last_lock: None,
        }
    }

    pub fn show_preview(self, show_preview: bool) -> Self {
        Self {
            show_preview,
            ..self
        }
    }

    pub fn last_lock(self, last_lock: Option<LockOutcome>) -> Self {
        Self { last_lock, ..self }
    }

    /// Rows needed for the tallest column; the board is followed by the
    /// status line.
    pub fn height(&self) -> u16 {
        let board = BoardDisplay::new(self.game.board())
            .block(Block::bordered())
            .height();
        let stats = StatsDisplay::new(self.game)
            .block(Block::bordered())
            .height();
        u16::max(board + 1, stats)
    }
}

/// Status line text for the most recent lock, if it is worth mentioning.
pub fn lock_message(outcome: LockOutcome) -> Option<String> {
    if outcome.game_over {
        return Some("Game over".to_owned());
    }
    match outcome.cleared_lines {
        0 => None,
        1 => Some(format!("Cleared 1 line (+{})", outcome.line_points)),
        n => Some(format!("Cleared {n} lines (+{})", outcome.line_points)),
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_padding = Padding::horizontal(1);
        let border_style = match self.state {
            PlayState::Playing => color::WHITE,
            PlayState::Paused => color::YELLOW,
            PlayState::GameOver => color::RED,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT)
        };

        let game_board = BoardDisplay::new(self.game.board())
            .ghost(self.game.ghost_piece())
            .active_piece(self.game.active_piece())
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let stats = StatsDisplay::new(self.game).block(panel("STATS"));
        let preview = PieceDisplay::new()
            .piece(self.game.next_piece())
            .block(panel("NEXT"));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(preview.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area, status_area] = Layout::vertical([
            Constraint::Length(game_board.height()),
            Constraint::Length(1),
        ])
        .areas(center_column);
        let [preview_area] =
            Layout::vertical([Constraint::Length(preview.height())]).areas(right_column);

        let game_board_width = game_board.width();
        stats.render(stats_area, buf);
        game_board.render(board_area, buf);
        if self.show_preview {
            preview.render(preview_area, buf);
        }
        if let Some(message) = self.last_lock.and_then(lock_message) {
            Line::styled(message, style::STATUS)
                .centered()
                .render(status_area, buf);
        }

        let popup = match self.state {
            PlayState::Playing => None,
            PlayState::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            PlayState::GameOver => {
                Some(("GAME OVER!!", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
