use blockfall_engine::{ActionError, Game, GameEvent, LockOutcome};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use ratatui_runtime::{App, RenderMode, Runtime};

use crate::{
    command::play::keymap::{self, KeyAction},
    view::widgets::{GameDisplay, KeyBindingDisplay, PlayState},
};

const FPS: f64 = 60.0;

#[derive(Debug)]
pub(super) struct PlayApp {
    game: Game,
    show_preview: bool,
    is_paused: bool,
    is_exiting: bool,
    last_lock: Option<LockOutcome>,
}

impl PlayApp {
    pub(super) fn new(game: Game, show_preview: bool) -> Self {
        Self {
            game,
            show_preview,
            is_paused: false,
            is_exiting: false,
            last_lock: None,
        }
    }

    pub(super) fn into_game(self) -> Game {
        self.game
    }

    fn play_state(&self) -> PlayState {
        if self.game.status().is_game_over() {
            PlayState::GameOver
        } else if self.is_paused {
            PlayState::Paused
        } else {
            PlayState::Playing
        }
    }

    /// Feeds one event to the game and keeps the gravity timer in step with the
    /// score.
    fn apply(&mut self, runtime: &mut Runtime, event: GameEvent) {
        match self.game.handle_event(event) {
            Ok(Some(outcome)) => {
                self.last_lock = Some(outcome);
                runtime.set_tick_interval(Some(self.game.gravity_interval()));
                // A new piece gets a full gravity period.
                runtime.restart_tick();
            }
            Ok(None) | Err(ActionError::Blocked | ActionError::GameOver) => {}
        }
    }

    fn play_again(&mut self, runtime: &mut Runtime) {
        self.game.reset();
        self.last_lock = None;
        self.is_paused = false;
        runtime.set_tick_interval(Some(self.game.gravity_interval()));
        runtime.restart_tick();
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
        runtime.set_tick_interval(Some(self.game.gravity_interval()));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        let Some(action) = keymap::key_action(key.code) else {
            return;
        };
        match (action, self.play_state()) {
            (KeyAction::Quit, _) => self.is_exiting = true,
            (KeyAction::Game(command), PlayState::Playing) => {
                self.apply(runtime, GameEvent::Input(command));
            }
            (KeyAction::TogglePause, PlayState::Playing | PlayState::Paused) => {
                self.is_paused = !self.is_paused;
            }
            (KeyAction::PlayAgain, PlayState::GameOver) => self.play_again(runtime),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.play_state();
        let game_display = GameDisplay::new(&self.game, state)
            .show_preview(self.show_preview)
            .last_lock(self.last_lock);
        let bindings = match state {
            PlayState::Playing => keymap::PLAYING_BINDINGS,
            PlayState::Paused => keymap::PAUSED_BINDINGS,
            PlayState::GameOver => keymap::GAME_OVER_BINDINGS,
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(game_display.height()), Constraint::Length(1)])
                .areas(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(KeyBindingDisplay::new(bindings), help_area);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if self.play_state() == PlayState::Playing {
            self.apply(runtime, GameEvent::Tick);
        }
    }
}
