//! Login screen feature.
//!
//! The navigation target of a successful registration. It loads the stored
//! session record and displays the registered account; real sign-in is out
//! of scope.

mod render;
mod state;
mod update;

pub use render::{login_lines, render_login};
pub use state::LoginState;
pub use update::handle_session_loaded;
