//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! reconciliation core used by the views.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg).await,
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg).await,
        Commands::Workers { .. } => cli::commands::workers::handle(cli, cfg).await,
        Commands::Stats => cli::commands::stats::handle(cli, cfg).await,
        Commands::Hourly { .. } => cli::commands::hourly::handle(cli, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init();

    // `init` must work even when the existing file is broken
    let mut cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&Config::resolve_path(cli.config.as_deref()))?,
    };

    if let Some(api) = &cli.api {
        cfg.api_url = api.clone();
    }

    dispatch(&cli, &cfg).await
}
