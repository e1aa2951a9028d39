mod cli;
mod commands;
mod config;
mod error;
mod runner;
mod skill;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use store::keychain::KeychainStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = config::load().context("Failed to load configuration")?;
    let store = KeychainStore::new(&config);

    match cli.command {
        Command::Set { key, value } => commands::set::run(&store, &key, value)?,
        Command::Get { key } => commands::get::run(&store, &key)?,
        Command::Delete { key } => commands::delete::run(&store, &key)?,
        Command::List => commands::list::run(&store)?,
        Command::Init => commands::init::run(&config)?,
    }

    Ok(())
}

/// Diagnostics go to stderr so `vault get` output stays pipe-clean.
/// Quiet by default; raise with `RUST_LOG=vault=debug`.
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
