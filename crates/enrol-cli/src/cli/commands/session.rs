//! `enrol session` - inspect and clear the stored session record.

use anyhow::{Context, Result};
use enrol_core::session::{SESSION_KEY, SessionRecord};
use enrol_core::store::{KvStore, format_timestamp};

/// Prints the stored session record as pretty JSON.
pub fn show() -> Result<()> {
    let store = KvStore::open()?;
    match store.get_json::<SessionRecord>(SESSION_KEY)? {
        Some(record) => {
            let json =
                serde_json::to_string_pretty(&record).context("serialize session record")?;
            println!("{json}");

            let modified = store
                .entries()?
                .into_iter()
                .find(|entry| entry.key == SESSION_KEY)
                .and_then(|entry| entry.modified);
            if let Some(modified) = modified {
                println!("Updated: {}", format_timestamp(modified));
            }
        }
        None => println!("No saved session."),
    }
    Ok(())
}

/// Removes the stored session record.
pub fn clear() -> Result<()> {
    let store = KvStore::open()?;
    if store.remove(SESSION_KEY)? {
        println!("Session cleared.");
    } else {
        println!("No saved session.");
    }
    Ok(())
}

/// Prints the path the session record is stored at.
pub fn path() -> Result<()> {
    let store = KvStore::open()?;
    println!("{}", store.path_for(SESSION_KEY)?.display());
    Ok(())
}
