use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Application driven by [`Runtime::run`].
///
/// All callbacks run on the thread that called `run`, one at a time, so the
/// application can own its state without locking.
pub trait App {
    /// Called once before the first event. Use this to configure the tick
    /// interval and render mode.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event (key press, resize, ...).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws a frame.
    fn draw(&self, frame: &mut Frame);

    /// Advances timer-driven state (called on every tick).
    fn update(&mut self, runtime: &mut Runtime);
}
