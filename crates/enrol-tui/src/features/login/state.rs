//! Login screen state.

use enrol_core::session::SessionRecord;

/// State of the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    /// The stored session record, once loaded.
    pub session: Option<SessionRecord>,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Load failure surfaced to the user, if any.
    pub load_error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }
}
