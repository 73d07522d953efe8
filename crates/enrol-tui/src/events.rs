//! UI event types.
//!
//! All inputs to the TUI are converted to `UiEvent` before being processed
//! by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async store operations send their result events directly to the
//! runtime's event inbox; the runtime drains the inbox each frame. The
//! reducer is the only place that reacts to them.

use crossterm::event::Event as CrosstermEvent;
use enrol_core::session::SessionRecord;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (for the submitting spinner).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// Async session persistence completed.
    SessionSaved { result: Result<(), String> },

    /// Async session load completed (None when nothing is stored).
    SessionLoaded {
        result: Result<Option<SessionRecord>, String>,
    },
}
