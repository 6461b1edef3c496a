use std::{
    io,
    time::{Duration, Instant},
};

use crate::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Terminal application runtime.
///
/// Owns the terminal for the duration of [`Runtime::run`] and feeds the
/// application ticks, terminal events and render requests.
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(),
        }
    }

    /// Sets the tick interval; `None` stops ticks.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.schedule_mut().set_tick_interval(interval);
    }

    /// Starts a fresh tick period now, postponing the next tick by a full
    /// interval.
    pub fn restart_tick(&mut self) {
        self.events.schedule_mut().restart_tick(Instant::now());
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.schedule_mut().set_render_mode(mode);
    }

    /// Runs the application until [`App::should_exit`] returns true.
    ///
    /// 1. Calls `app.init()`
    /// 2. Dispatches events until the app asks to exit:
    ///    - tick: `app.update()`
    ///    - render: `app.draw()`
    ///    - terminal event: `app.handle_event()`
    ///
    /// The terminal is restored before returning, on success or error.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
