use blockfall_engine::Command;
use crossterm::event::KeyCode;

use crate::view::widgets::KeyBinding;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    Game(Command),
    TogglePause,
    PlayAgain,
    Quit,
}

pub(super) fn key_action(code: KeyCode) -> Option<KeyAction> {
    let action = match code {
        KeyCode::Left => KeyAction::Game(Command::MoveLeft),
        KeyCode::Right => KeyAction::Game(Command::MoveRight),
        KeyCode::Down => KeyAction::Game(Command::SoftDrop),
        KeyCode::Up => KeyAction::Game(Command::Rotate),
        KeyCode::Char(' ') => KeyAction::Game(Command::HardDrop),
        KeyCode::Char('p' | 'P') => KeyAction::TogglePause,
        KeyCode::Char('r' | 'R') | KeyCode::Enter => KeyAction::PlayAgain,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

pub(super) const PLAYING_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Soft Drop"),
    (&["↑"], "Rotate"),
    (&["Space"], "Hard Drop"),
    (&["P"], "Pause"),
    (&["Q"], "Quit"),
];

pub(super) const PAUSED_BINDINGS: &[KeyBinding] = &[(&["P"], "Resume"), (&["Q"], "Quit")];

pub(super) const GAME_OVER_BINDINGS: &[KeyBinding] =
    &[(&["R", "Enter"], "Play Again"), (&["Q"], "Quit")];
