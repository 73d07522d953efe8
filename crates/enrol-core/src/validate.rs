//! Validation rules for the registration form.
//!
//! `validate` is a pure function from field values to an error map. It is
//! re-evaluated on every field change and before submit; the form state
//! never mutates its error map independently of a value change.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::form::{Field, FormState};

/// Minimum username length (characters).
pub const USERNAME_MIN: usize = 3;

/// Maximum username length (characters).
pub const USERNAME_MAX: usize = 20;

/// Minimum password length (characters).
pub const PASSWORD_MIN: usize = 8;

/// Symbols that satisfy the password special-character rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Well-formed email: local part, "@", domain with at least one dot.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Validates all fields, returning a map of field to error message.
///
/// A field absent from the map is valid. The map is a pure function of the
/// current field values: calling this twice on the same state yields
/// identical results.
pub fn validate(form: &FormState) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();

    if let Some(message) = validate_username(form.value(Field::Username)) {
        errors.insert(Field::Username, message);
    }
    if let Some(message) = validate_email(form.value(Field::Email)) {
        errors.insert(Field::Email, message);
    }
    if let Some(message) = validate_password(form.value(Field::Password)) {
        errors.insert(Field::Password, message);
    }
    if let Some(message) = validate_confirm_password(
        form.value(Field::Password),
        form.value(Field::ConfirmPassword),
    ) {
        errors.insert(Field::ConfirmPassword, message);
    }

    errors
}

fn validate_username(username: &str) -> Option<String> {
    if username.is_empty() {
        return Some("Username is required".to_string());
    }
    let len = username.chars().count();
    if len < USERNAME_MIN {
        return Some(format!(
            "Username must be at least {USERNAME_MIN} characters"
        ));
    }
    if len > USERNAME_MAX {
        return Some(format!("Username must be at most {USERNAME_MAX} characters"));
    }
    None
}

fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Some("Invalid email address".to_string());
    }
    None
}

/// Password must be long enough, contain a digit, and contain a symbol.
///
/// All failing sub-rules are reported, joined into one message, so a user
/// fixing one requirement can already see the others.
fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }

    let mut failures = Vec::new();
    if password.chars().count() < PASSWORD_MIN {
        failures.push(format!("Password must be at least {PASSWORD_MIN} characters"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failures.push("Password must contain at least one number".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        failures.push("Password must contain at least one special character".to_string());
    }

    if failures.is_empty() {
        None
    } else {
        Some(failures.join("; "))
    }
}

fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        return Some("Confirm password is required".to_string());
    }
    if confirm != password {
        return Some("Passwords must match".to_string());
    }
    None
}
