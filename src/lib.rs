//! energydash library root.
//! Exposes the CLI parser, the high-level run() function, and the parsing,
//! validation and analytics modules behind it.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Validate { .. } => cli::commands::validate::handle(&cli.command),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command),
        Commands::Overused { .. } => cli::commands::overused::handle(&cli.command),
        Commands::Recommend { .. } => cli::commands::recommend::handle(&cli.command),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Tariff { .. } => cli::commands::tariff::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg, cfg_path),
    }
}

/// Logs go to stderr so command output stays clean; `RUST_LOG` wins over the config.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // load config once, before logging so its level applies
    let cfg = Config::load_from(&cfg_path)?;
    init_tracing(&cfg.log_level);
    tracing::debug!(config = %cfg_path.display(), "configuration loaded");

    dispatch(&cli, &cfg, &cfg_path)
}
