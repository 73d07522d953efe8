//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Route};
use crate::{login, register};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SessionSaved { result } => {
            match register::handle_session_saved(&mut app.register, result) {
                Some(route) => navigate(app, route),
                None => vec![],
            }
        }
        UiEvent::SessionLoaded { result } => {
            login::handle_session_loaded(&mut app.login, result);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        // Redraw is driven by the tick cadence; nothing to do on resize
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // Esc pops the route stack; at the root it quits. A pending save is
    // never abandoned mid-flight: while submitting, Esc is a no-op.
    if key.code == KeyCode::Esc {
        if app.route() == Route::Register && app.register.is_submitting() {
            return vec![];
        }
        if app.pop_route() {
            return vec![];
        }
        return vec![UiEffect::Quit];
    }

    match app.route() {
        Route::Register => {
            let (effects, nav) = register::handle_key(&mut app.register, &app.config, key);
            match nav {
                Some(route) => {
                    let mut all = navigate(app, route);
                    all.extend(effects);
                    all
                }
                None => effects,
            }
        }
        // The login screen has no interactive controls beyond navigation
        Route::Login => vec![],
    }
}

/// Pushes a route and emits the effects its screen needs on entry.
fn navigate(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    app.push_route(route);
    match route {
        Route::Login => {
            app.login.loading = true;
            vec![UiEffect::LoadSession]
        }
        Route::Register => vec![],
    }
}

#[cfg(test)]
mod tests {
    use enrol_core::config::Config;
    use enrol_core::form::Field;
    use enrol_core::session::SessionRecord;
    use serde_json::json;

    use super::*;
    use crate::register::SubmitPhase;

    fn key_event(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key_event(KeyCode::Char(c)));
        }
    }

    fn fill_form(app: &mut AppState, values: [&str; 4]) {
        for value in values {
            type_text(app, value);
            update(app, key_event(KeyCode::Tab));
        }
    }

    #[test]
    fn test_rejected_submit_shows_username_error_and_writes_nothing() {
        // Scenario: username too short, everything else valid
        let mut app = AppState::new(Config::default());
        fill_form(&mut app, ["ab", "a@b.com", "Abc12345!", "Abc12345!"]);

        let effects = update(&mut app, key_event(KeyCode::Enter));

        assert!(effects.is_empty(), "no storage write, no navigation");
        assert_eq!(app.route(), Route::Register);
        assert!(app.register.form.visible_error(Field::Username).is_some());
    }

    #[test]
    fn test_accepted_submit_saves_exact_record_and_navigates_once() {
        let mut app = AppState::new(Config::default());
        fill_form(
            &mut app,
            ["alice", "alice@example.com", "Secret1!", "Secret1!"],
        );

        let effects = update(&mut app, key_event(KeyCode::Enter));

        // The record handed to storage matches the wire format exactly
        let [UiEffect::SaveSession { record }] = effects.as_slice() else {
            panic!("expected exactly one SaveSession, got {effects:?}");
        };
        assert_eq!(
            serde_json::to_value(record).unwrap(),
            json!({
                "userName": "alice",
                "email": "alice@example.com",
                "password": "Secret1!",
                "token": "sample-token",
            })
        );
        assert!(app.register.is_submitting());

        // Persistence completes: navigation to login happens exactly once
        let effects = update(&mut app, UiEvent::SessionSaved { result: Ok(()) });
        assert_eq!(app.route(), Route::Login);
        assert_eq!(
            app.routes.iter().filter(|r| **r == Route::Login).count(),
            1
        );
        assert!(matches!(effects.as_slice(), [UiEffect::LoadSession]));

        // The form state was discarded
        assert_eq!(app.register.form.value(Field::Username), "");

        // The login screen receives the stored record
        let record = SessionRecord::issue("alice", "alice@example.com", "Secret1!", "sample-token");
        update(
            &mut app,
            UiEvent::SessionLoaded {
                result: Ok(Some(record.clone())),
            },
        );
        assert_eq!(app.login.session, Some(record));
    }

    #[test]
    fn test_password_without_digit_or_symbol_blocks_submit() {
        let mut app = AppState::new(Config::default());
        fill_form(
            &mut app,
            ["alice", "alice@example.com", "secretword", "secretword"],
        );

        let effects = update(&mut app, key_event(KeyCode::Enter));
        assert!(effects.is_empty());

        let error = app
            .register
            .form
            .visible_error(Field::Password)
            .expect("password error");
        assert!(error.contains("number"));
        assert!(error.contains("special character"));
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut app = AppState::new(Config::default());
        fill_form(
            &mut app,
            ["alice", "alice@example.com", "Secret1!", "Secret1!"],
        );

        let first = update(&mut app, key_event(KeyCode::Enter));
        assert_eq!(first.len(), 1);

        let second = update(&mut app, key_event(KeyCode::Enter));
        assert!(second.is_empty(), "submitting phase locks out re-submit");
    }

    #[test]
    fn test_save_failure_returns_to_editing_with_visible_error() {
        let mut app = AppState::new(Config::default());
        fill_form(
            &mut app,
            ["alice", "alice@example.com", "Secret1!", "Secret1!"],
        );
        update(&mut app, key_event(KeyCode::Enter));

        let effects = update(
            &mut app,
            UiEvent::SessionSaved {
                result: Err("disk full".to_string()),
            },
        );

        assert!(effects.is_empty(), "no navigation on failure");
        assert_eq!(app.route(), Route::Register);
        assert_eq!(app.register.phase, SubmitPhase::Editing);
        assert!(
            app.register
                .form_error
                .as_deref()
                .is_some_and(|e| e.contains("disk full"))
        );
    }

    #[test]
    fn test_login_link_navigates_without_saving() {
        let mut app = AppState::new(Config::default());
        // Walk focus backward from Username to the login link
        update(&mut app, key_event(KeyCode::BackTab));

        let effects = update(&mut app, key_event(KeyCode::Enter));

        assert_eq!(app.route(), Route::Login);
        assert!(matches!(effects.as_slice(), [UiEffect::LoadSession]));
    }

    #[test]
    fn test_esc_pops_back_to_register_then_quits() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key_event(KeyCode::BackTab));
        update(&mut app, key_event(KeyCode::Enter));
        assert_eq!(app.route(), Route::Login);

        let effects = update(&mut app, key_event(KeyCode::Esc));
        assert!(effects.is_empty());
        assert_eq!(app.route(), Route::Register);

        let effects = update(&mut app, key_event(KeyCode::Esc));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = AppState::new(Config::default());
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }
}
