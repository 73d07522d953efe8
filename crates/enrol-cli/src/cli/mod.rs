//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use enrol_core::config::Config;
use enrol_core::store::KvStore;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "enrol")]
#[command(version = "0.1")]
#[command(about = "Terminal account registration form")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the placeholder token issued on registration
    #[arg(long)]
    token: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage the locally stored session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum SessionCommands {
    /// Show the stored session record
    Show,
    /// Remove the stored session record
    Clear,
    /// Show the path the session record is stored at
    Path,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(token) = cli.token.as_deref() {
        let trimmed = token.trim();
        if !trimmed.is_empty() {
            config.token = trimmed.to_string();
        }
    }

    // default to the registration form
    let Some(command) = cli.command else {
        // Log to a file - stdout belongs to the TUI
        let _guard = logging::init()?;
        let store = KvStore::open().context("open local store")?;
        tracing::info!("starting registration form");
        return enrol_tui::run_registration(&config, store).await;
    };

    match command {
        Commands::Session { command } => match command {
            SessionCommands::Show => commands::session::show(),
            SessionCommands::Clear => commands::session::clear(),
            SessionCommands::Path => commands::session::path(),
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
