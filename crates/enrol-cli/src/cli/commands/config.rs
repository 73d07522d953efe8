//! `enrol config` - configuration management commands.

use anyhow::Result;
use enrol_core::config::{Config, paths};

/// Prints the config file path.
pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

/// Writes the default config template if no config file exists yet.
pub fn init() -> Result<()> {
    let path = Config::init()?;
    println!("Config at {}", path.display());
    Ok(())
}
