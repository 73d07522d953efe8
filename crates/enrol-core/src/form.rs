//! Registration form state.
//!
//! `FormState` holds the current field values plus interaction metadata:
//! which fields have been touched (visited and left), and the error map.
//!
//! ## Invariant
//!
//! `errors` is always exactly `validate(values)`. Every mutation of a field
//! value recomputes the map; nothing else writes to it. Error *visibility*
//! is a separate concern: an error is surfaced to the user only once its
//! field has been touched, so a fresh form does not open covered in red.

use std::collections::{BTreeMap, BTreeSet};

use crate::validate;

/// A field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order.
    pub fn all() -> [Field; 4] {
        [
            Field::Username,
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
        ]
    }

    /// Human-readable label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field's value should be masked when rendered.
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// The field after this one in display order, if any.
    pub fn next(&self) -> Option<Field> {
        match self {
            Field::Username => Some(Field::Email),
            Field::Email => Some(Field::Password),
            Field::Password => Some(Field::ConfirmPassword),
            Field::ConfirmPassword => None,
        }
    }
}

/// In-memory state of the registration form.
///
/// Created empty when the register screen mounts, mutated on every
/// keystroke, and discarded after a successful submit (the screen navigates
/// away) or on unmount.
#[derive(Debug, Clone)]
pub struct FormState {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates an empty form. The error map is populated immediately so the
    /// invariant holds from construction (empty required fields are invalid,
    /// just not yet visible).
    pub fn new() -> Self {
        let mut form = Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
        };
        form.revalidate();
        form
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replaces a field's value and recomputes the error map.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.revalidate();
    }

    /// Appends a character to a field and recomputes the error map.
    pub fn push_char(&mut self, field: Field, c: char) {
        self.value_mut(field).push(c);
        self.revalidate();
    }

    /// Removes the last character of a field and recomputes the error map.
    pub fn pop_char(&mut self, field: Field) {
        self.value_mut(field).pop();
        self.revalidate();
    }

    /// Marks a field as touched (visited and left).
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Marks every field as touched, so all errors render. Used when a
    /// submit attempt is rejected by validation.
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::all());
    }

    /// Whether a field has been touched.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The field's current error, regardless of visibility.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The field's error if it should be shown to the user: present only
    /// when the field is both invalid and touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Whether the whole form passes validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate::validate(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_invalid_but_shows_nothing() {
        let form = FormState::new();
        assert!(!form.is_valid());
        for field in Field::all() {
            assert!(form.error(field).is_some());
            assert_eq!(form.visible_error(field), None);
        }
    }

    #[test]
    fn test_errors_track_every_value_change() {
        let mut form = FormState::new();
        form.set_value(Field::Username, "ab");
        assert!(form.error(Field::Username).is_some());

        form.push_char(Field::Username, 'c');
        assert!(form.error(Field::Username).is_none());

        form.pop_char(Field::Username);
        assert!(form.error(Field::Username).is_some());
    }

    #[test]
    fn test_visible_error_requires_touch() {
        let mut form = FormState::new();
        form.set_value(Field::Email, "nope");
        assert_eq!(form.visible_error(Field::Email), None);

        form.touch(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_touch_all_reveals_every_error() {
        let mut form = FormState::new();
        form.touch_all();
        for field in Field::all() {
            assert!(form.visible_error(field).is_some());
        }
    }

    #[test]
    fn test_confirm_revalidates_when_password_changes() {
        let mut form = FormState::new();
        form.set_value(Field::Password, "Secret1!");
        form.set_value(Field::ConfirmPassword, "Secret1!");
        assert!(form.error(Field::ConfirmPassword).is_none());

        // Editing the password invalidates the previously matching confirm
        form.push_char(Field::Password, 'x');
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[test]
    fn test_complete_form_is_valid() {
        let mut form = FormState::new();
        form.set_value(Field::Username, "alice");
        form.set_value(Field::Email, "alice@example.com");
        form.set_value(Field::Password, "Secret1!");
        form.set_value(Field::ConfirmPassword, "Secret1!");
        assert!(form.is_valid());
    }
}
