use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::{Due, TuiEvent};

/// When frames are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Draw at fixed intervals whether or not anything changed.
    Interval(Duration),
    /// Draw once after every tick or terminal event.
    #[default]
    OnDirty,
    /// Draw after changes, at most once per interval.
    ///
    /// Changes arriving faster than the interval are batched into one frame.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from a frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Decides which timer event is due at a given instant.
///
/// Pure bookkeeping with no I/O, so it can be driven with synthetic instants.
/// Ticks take priority over renders, so a slow terminal never delays gravity.
#[derive(Debug)]
pub(super) struct Schedule {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Option<Instant>,
    dirty: bool,
}

impl Schedule {
    pub(super) fn new(now: Instant) -> Self {
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: now,
            last_render: None,
            dirty: true,
        }
    }

    /// Sets the tick interval; `None` stops ticks.
    ///
    /// The next tick is measured from the previous one, so shortening the
    /// interval can make a tick due immediately.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Restarts the tick period at `now`.
    pub(super) fn restart_tick(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Records a state change that needs a new frame.
    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the event due at `now`, if any, and records that it fired.
    pub(super) fn take_due(&mut self, now: Instant) -> Option<Due> {
        if let Some(interval) = self.tick_interval
            && now.duration_since(self.last_tick) >= interval
        {
            self.last_tick = now;
            self.dirty = true;
            return Some(Due::Tick);
        }

        let since_render = |interval: Duration| {
            self.last_render
                .is_none_or(|last| now.duration_since(last) >= interval)
        };
        let render = match self.render_mode {
            RenderMode::Interval(interval) => since_render(interval),
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => self.dirty && since_render(interval),
        };
        if render {
            self.last_render = Some(now);
            self.dirty = false;
            return Some(Due::Render);
        }
        None
    }

    /// How long terminal input may be awaited before a timer event is due.
    ///
    /// `None` means no timer event is pending and input can be awaited
    /// indefinitely.
    pub(super) fn timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick = self.tick_interval.map(|interval| self.last_tick + interval);
        let after_render =
            |interval: Duration| self.last_render.map_or(now, |last| last + interval);
        let next_render = match self.render_mode {
            RenderMode::Interval(interval) => Some(after_render(interval)),
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| after_render(interval)),
        };
        let deadline = [next_tick, next_render].into_iter().flatten().min()?;
        Some(deadline.saturating_duration_since(now))
    }
}

/// Multiplexes the [`Schedule`] with crossterm's input queue.
#[derive(Debug)]
pub(super) struct EventLoop {
    schedule: Schedule,
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            schedule: Schedule::new(Instant::now()),
        }
    }

    pub(super) fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }

    /// Blocks until a timer event is due or terminal input arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(due) = self.schedule.take_due(now) {
                return Ok(due.into());
            }

            if let Some(timeout) = self.schedule.timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.schedule.mark_dirty();
            return Ok(event::read()?.into());
        }
    }
}
