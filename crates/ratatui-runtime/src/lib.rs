//! Minimal single-threaded event loop for ratatui applications.
//!
//! [`Runtime`] multiplexes a tick timer, render scheduling and crossterm
//! input into one stream and hands each event to an [`App`] in turn.

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
