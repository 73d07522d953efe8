//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - combined state (route stack + per-screen slices)
//! - `Route` - the navigable screens
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── routes: Vec<Route>        (navigation stack, last = current)
//! ├── register: RegisterState   (form, focus, submit phase)
//! ├── login: LoginState         (loaded session record)
//! └── config: Config
//! ```
//!
//! Navigation is a plain route stack: screens request a push, Esc pops.
//! The reducer is the only place that mutates it.

use enrol_core::config::Config;

use crate::login::LoginState;
use crate::register::RegisterState;

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    Login,
}

impl Route {
    /// Route path, for logging and display.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Register => "/register",
            Route::Login => "/login",
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Navigation stack; the last entry is the visible screen.
    pub routes: Vec<Route>,
    /// Registration screen state.
    pub register: RegisterState,
    /// Login screen state.
    pub login: LoginState,
    /// Application configuration.
    pub config: Config,
    /// Spinner animation frame counter (for the submitting indicator).
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the initial state: the register screen with an empty form.
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            routes: vec![Route::Register],
            register: RegisterState::new(),
            login: LoginState::new(),
            config,
            spinner_frame: 0,
        }
    }

    /// The currently visible route.
    pub fn route(&self) -> Route {
        *self.routes.last().expect("route stack is never empty")
    }

    /// Pushes a route onto the navigation stack.
    pub fn push_route(&mut self, route: Route) {
        tracing::debug!(route = route.path(), "navigate");
        self.routes.push(route);
    }

    /// Pops the current route. Returns false when already at the root.
    pub fn pop_route(&mut self) -> bool {
        if self.routes.len() > 1 {
            self.routes.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_register() {
        let app = AppState::new(Config::default());
        assert_eq!(app.route(), Route::Register);
    }

    #[test]
    fn test_pop_stops_at_root() {
        let mut app = AppState::new(Config::default());
        app.push_route(Route::Login);
        assert_eq!(app.route(), Route::Login);

        assert!(app.pop_route());
        assert_eq!(app.route(), Route::Register);
        assert!(!app.pop_route());
    }
}
