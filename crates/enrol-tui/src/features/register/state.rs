//! Registration screen state.

use enrol_core::form::{Field, FormState};

/// The focusable controls of the register screen, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
    LoginLink,
}

impl Focus {
    /// All focus targets in traversal order.
    pub fn order() -> [Focus; 6] {
        [
            Focus::Field(Field::Username),
            Focus::Field(Field::Email),
            Focus::Field(Field::Password),
            Focus::Field(Field::ConfirmPassword),
            Focus::Submit,
            Focus::LoginLink,
        ]
    }

    /// The next focus target, wrapping at the end.
    pub fn next(&self) -> Focus {
        let order = Focus::order();
        let idx = order.iter().position(|f| f == self).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    /// The previous focus target, wrapping at the start.
    pub fn prev(&self) -> Focus {
        let order = Focus::order();
        let idx = order.iter().position(|f| f == self).unwrap_or(0);
        order[(idx + order.len() - 1) % order.len()]
    }
}

/// Submit workflow phase.
///
/// `Submitting` doubles as the re-submit lock: while a save is pending the
/// screen ignores input and renders the submit control disabled, so a
/// second submit cannot produce duplicate writes or duplicate navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

/// State of the registration screen.
#[derive(Debug, Clone)]
pub struct RegisterState {
    /// The form's field values, touched set, and error map.
    pub form: FormState,
    /// Currently focused control.
    pub focus: Focus,
    /// Submit workflow phase.
    pub phase: SubmitPhase,
    /// Persistence failure surfaced to the user, if any.
    pub form_error: Option<String>,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterState {
    /// Creates a fresh screen with an empty form.
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::Field(Field::Username),
            phase: SubmitPhase::Editing,
            form_error: None,
        }
    }

    /// Whether a save is currently pending.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}
