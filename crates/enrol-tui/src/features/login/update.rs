//! Login feature reducer.

use enrol_core::session::SessionRecord;

use super::state::LoginState;

/// Handles the result of loading the stored session record.
pub fn handle_session_loaded(
    state: &mut LoginState,
    result: Result<Option<SessionRecord>, String>,
) {
    state.loading = false;
    match result {
        Ok(session) => {
            state.session = session;
            state.load_error = None;
        }
        Err(message) => {
            state.session = None;
            state.load_error = Some(message);
        }
    }
}
