//! Registration feature reducer.
//!
//! Handles key input for the register screen and the submit workflow:
//! Editing -> Submitting -> (on success) navigation to the login route.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use enrol_core::config::Config;
use enrol_core::form::Field;
use enrol_core::session::SessionRecord;

use super::state::{Focus, RegisterState, SubmitPhase};
use crate::effects::UiEffect;
use crate::state::Route;

/// Handles a key event on the register screen.
///
/// Returns the effects to execute plus an optional route the screen wants
/// pushed (the inline Login link). The main reducer applies navigation.
pub fn handle_key(
    state: &mut RegisterState,
    config: &Config,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<Route>) {
    // Re-submit lock: while a save is pending the screen takes no input.
    if state.is_submitting() {
        return (vec![], None);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            move_focus(state, Direction::Forward);
            (vec![], None)
        }
        KeyCode::BackTab | KeyCode::Up => {
            move_focus(state, Direction::Backward);
            (vec![], None)
        }
        KeyCode::Enter => match state.focus {
            // Enter on a mid-form field advances, like Tab
            Focus::Field(field) if field.next().is_some() => {
                move_focus(state, Direction::Forward);
                (vec![], None)
            }
            // Enter on the last field or the submit control submits
            Focus::Field(_) | Focus::Submit => (submit(state, config), None),
            Focus::LoginLink => (vec![], Some(Route::Login)),
        },
        KeyCode::Backspace => {
            if let Focus::Field(field) = state.focus {
                state.form.pop_char(field);
                state.form_error = None;
            }
            (vec![], None)
        }
        KeyCode::Char(c) if !ctrl => {
            if let Focus::Field(field) = state.focus {
                state.form.push_char(field, c);
                state.form_error = None;
            }
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

/// Attempts to submit the form.
///
/// Guard: any validation error rejects the transition - every field is
/// marked touched so its error renders, no storage write happens, and the
/// screen stays in Editing.
fn submit(state: &mut RegisterState, config: &Config) -> Vec<UiEffect> {
    if !state.form.is_valid() {
        state.form.touch_all();
        return vec![];
    }

    let record = SessionRecord::issue(
        state.form.value(Field::Username),
        state.form.value(Field::Email),
        state.form.value(Field::Password),
        config.token.clone(),
    );

    state.phase = SubmitPhase::Submitting;
    state.form_error = None;
    vec![UiEffect::SaveSession { record }]
}

/// Handles the persistence result.
///
/// On success the form state is discarded (the screen navigates away, and a
/// return visit gets a fresh form) and the login route is requested exactly
/// once. On failure the screen returns to Editing with an observable error.
pub fn handle_session_saved(
    state: &mut RegisterState,
    result: Result<(), String>,
) -> Option<Route> {
    match result {
        Ok(()) => {
            *state = RegisterState::new();
            Some(Route::Login)
        }
        Err(message) => {
            state.phase = SubmitPhase::Editing;
            state.form_error = Some(format!("Could not save your details: {message}"));
            None
        }
    }
}

enum Direction {
    Forward,
    Backward,
}

/// Moves focus, blurring the field being left.
///
/// Leaving a field counts as the blur that makes its error visible.
fn move_focus(state: &mut RegisterState, direction: Direction) {
    if let Focus::Field(field) = state.focus {
        state.form.touch(field);
    }
    state.focus = match direction {
        Direction::Forward => state.focus.next(),
        Direction::Backward => state.focus.prev(),
    };
}
