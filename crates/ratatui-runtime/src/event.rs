use crossterm::event::Event as CrosstermEvent;

/// One unit of work for the application, delivered strictly one at a time.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The tick interval elapsed.
    Tick,
    /// A frame should be drawn.
    Render,
    /// Key press, resize or other terminal input.
    Crossterm(CrosstermEvent),
}

/// Timer-driven events that are due without waiting for terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Due {
    Tick,
    Render,
}

impl From<Due> for TuiEvent {
    fn from(due: Due) -> Self {
        match due {
            Due::Tick => TuiEvent::Tick,
            Due::Render => TuiEvent::Render,
        }
    }
}
