//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (no direct UI mutations). This keeps the reducer
//! pure: it only mutates state and returns effects, never performs I/O.

use enrol_core::session::SessionRecord;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist the session record to the local store.
    ///
    /// The result re-enters the loop as `UiEvent::SessionSaved`; the
    /// register screen stays in its submitting phase until then.
    SaveSession { record: SessionRecord },

    /// Load the stored session record (for the login screen).
    LoadSession,
}
