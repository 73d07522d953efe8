//! Full-screen TUI for enrol.
//!
//! The registration form follows the Elm shape: `state` holds the data,
//! `update` is the reducer (all mutations happen there), `render` is the
//! pure view, and `runtime` owns the terminal and executes the effects the
//! reducer returns. `enrol-core` supplies the UI-independent form model.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use enrol_core::config::Config;
use enrol_core::store::KvStore;
pub use features::{login, register};
pub use runtime::TuiRuntime;

/// Runs the interactive registration flow.
pub async fn run_registration(config: &Config, store: KvStore) -> Result<()> {
    // The form requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("enrol requires a terminal. Use `enrol session show` for scripted access.");
    }

    let mut runtime = TuiRuntime::new(config.clone(), store)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
