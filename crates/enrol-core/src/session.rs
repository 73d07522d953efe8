//! The persisted session record.
//!
//! On successful registration the form values are packaged into a
//! `SessionRecord` and written to the local store under a well-known key.
//! The wire format is a flat camelCase JSON object:
//!
//! ```json
//! { "userName": "alice", "email": "alice@example.com", "password": "...", "token": "sample-token" }
//! ```
//!
//! The token is a fixed placeholder and the password is stored in plaintext.
//! Both are development stubs inherited from the original design; this is
//! not a credential store and must not be treated as one.

use serde::{Deserialize, Serialize};

/// Store key the session record is persisted under.
pub const SESSION_KEY: &str = "userDetails";

/// Default placeholder token issued on registration.
pub const PLACEHOLDER_TOKEN: &str = "sample-token";

/// A registered user's session, as persisted to the local store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl SessionRecord {
    /// Builds a session record from submitted form values and a token.
    pub fn issue(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            password: password.into(),
            token: token.into(),
        }
    }
}
